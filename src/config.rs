use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::expansion::expander::ExpansionConfig;
use crate::ranking::filter::RankConfig;

/// Subdirectories of the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    /// Cached API responses, one JSON array per query label
    Raw,
    /// Ranking results
    Processed,
    /// Reports for reading
    Outputs,
}

impl DataKind {
    pub const ALL: [DataKind; 3] = [DataKind::Raw, DataKind::Processed, DataKind::Outputs];

    pub fn dir_name(&self) -> &'static str {
        match self {
            DataKind::Raw => "raw",
            DataKind::Processed => "processed",
            DataKind::Outputs => "outputs",
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. CLI flags override
/// these values for a single run.
pub struct Config {
    /// Root of the raw/processed/outputs layout (NEWSPROBE_DATA_DIR)
    pub data_dir: PathBuf,
    pub min_core_df: usize,
    /// Defaults to min_core_df when unset
    pub min_seed_df: Option<usize>,
    pub threshold: f64,
    pub n_unkeywords: usize,
    /// Stem tokens with the English Porter2 stemmer (NEWSPROBE_STEM)
    pub stem: bool,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        let rank = RankConfig::default();
        let expansion = ExpansionConfig::default();

        let config = Self {
            data_dir: env::var("NEWSPROBE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            min_core_df: parse_var("NEWSPROBE_MIN_CORE_DF")?.unwrap_or(rank.min_core_df),
            min_seed_df: parse_var("NEWSPROBE_MIN_SEED_DF")?,
            threshold: parse_var("NEWSPROBE_THRESHOLD")?.unwrap_or(expansion.threshold),
            n_unkeywords: parse_var("NEWSPROBE_N_UNKEYWORDS")?.unwrap_or(expansion.n_unkeywords),
            stem: parse_flag("NEWSPROBE_STEM")?.unwrap_or(false),
        };

        config.rank_config().validate()?;
        if !(config.threshold > 0.0) {
            anyhow::bail!(
                "NEWSPROBE_THRESHOLD must be positive, got {}",
                config.threshold
            );
        }
        Ok(config)
    }

    pub fn rank_config(&self) -> RankConfig {
        RankConfig {
            min_core_df: self.min_core_df,
            min_seed_df: self.min_seed_df,
        }
    }

    /// Directory for one kind of data. Fails if it has not been created.
    pub fn data_dir_for(&self, kind: DataKind) -> Result<PathBuf> {
        let dir = self.data_dir.join(kind.dir_name());
        if !dir.is_dir() {
            anyhow::bail!(
                "Directory {} does not exist.\n\
                 Run `newsprobe init` to create the data layout.",
                dir.display()
            );
        }
        Ok(dir)
    }

    /// Full path to `file` inside the `kind` data directory.
    pub fn data_path(&self, kind: DataKind, file: &str) -> Result<PathBuf> {
        Ok(self.data_dir_for(kind)?.join(file))
    }

    /// Create every data subdirectory. Returns the directories created or
    /// already present.
    pub fn init_data_dirs(&self) -> Result<Vec<PathBuf>> {
        DataKind::ALL
            .iter()
            .map(|kind| {
                let dir = self.data_dir.join(kind.dir_name());
                std::fs::create_dir_all(&dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
                Ok(dir)
            })
            .collect()
    }

    #[cfg(test)]
    fn with_data_dir(data_dir: &std::path::Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            min_core_df: 5,
            min_seed_df: None,
            threshold: 0.3,
            n_unkeywords: 10,
            stem: false,
        }
    }
}

/// Parse an optional environment variable. Unset or empty is `None`; a value
/// that fails to parse is an error naming the variable.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} has an invalid value: {raw:?}")),
        _ => Ok(None),
    }
}

/// Parse an optional boolean environment variable. Accepts true/false,
/// 1/0, yes/no and on/off in any case.
fn parse_flag(name: &str) -> Result<Option<bool>> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => parse_bool(raw.trim())
            .map(Some)
            .with_context(|| format!("{name} has an invalid value: {raw:?} (expected true or false)")),
        _ => Ok(None),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn temp_root(name: &str) -> PathBuf {
        env::temp_dir().join(format!("newsprobe-config-{name}-{}", std::process::id()))
    }

    #[test]
    fn test_data_path_requires_existing_dir() {
        let root = temp_root("missing");
        let config = Config::with_data_dir(&root);
        for kind in DataKind::ALL {
            assert!(config.data_path(kind, "blah.json").is_err());
        }
    }

    #[test]
    fn test_data_path_after_init() {
        let root = temp_root("init");
        let config = Config::with_data_dir(&root);
        let created = config.init_data_dirs().unwrap();
        assert_eq!(created.len(), 3);

        for kind in DataKind::ALL {
            for file in ["blah.json", "something.csv", "else.xml"] {
                let path = config.data_path(kind, file).unwrap();
                assert_eq!(path.file_name().unwrap(), file);
                assert_eq!(
                    path.parent().unwrap().file_name().unwrap(),
                    kind.dir_name()
                );
            }
        }
        std::fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_parse_bool_spellings() {
        for raw in ["true", "TRUE", "1", "yes", "On"] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["false", "False", "0", "no", "OFF"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_rank_config_defaults_seed_threshold() {
        let config = Config::with_data_dir(Path::new("."));
        assert_eq!(config.rank_config().seed_threshold(), 5);
    }
}
