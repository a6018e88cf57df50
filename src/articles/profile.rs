// Query profiles: the core and seed terms for one investigation.
//
// A profile is a small JSON file:
//
//   {
//     "core_terms": ["nhs", "national health service"],
//     "seed_terms": [[["video"], ["call", "chat"]], [["telehealth"]]]
//   }
//
// Core terms are the alternatives the corpus was originally queried with.
// Seed terms are expansion rules used to rank within that corpus.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ranking::terms::SeedRule;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryProfile {
    pub core_terms: Vec<String>,
    #[serde(default)]
    pub seed_terms: Vec<SeedRule>,
}

impl QueryProfile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read query profile {}", path.display()))?;
        let profile: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid query profile {}", path.display()))?;

        if profile.core_terms.iter().all(|t| t.trim().is_empty()) {
            anyhow::bail!(
                "Query profile {} has no core terms; add at least one to \"core_terms\"",
                path.display()
            );
        }
        Ok(profile)
    }

    /// The news API query string: an OR of the quoted core terms.
    pub fn api_query(&self) -> String {
        self.core_terms
            .iter()
            .map(|t| format!("(\"{t}\")"))
            .collect::<Vec<_>>()
            .join(" OR ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_profile(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("newsprobe-{name}-{}.json", std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_profile() {
        let path = write_profile(
            "profile-ok",
            r#"{"core_terms": ["nhs"], "seed_terms": [[["video"], ["call"]]]}"#,
        );
        let profile = QueryProfile::load(&path).unwrap();
        assert_eq!(profile.core_terms, vec!["nhs"]);
        assert_eq!(profile.seed_terms, vec![SeedRule::new(&["video"], &["call"])]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_profile_without_core_terms_fails() {
        let path = write_profile("profile-empty", r#"{"core_terms": []}"#);
        assert!(QueryProfile::load(&path).is_err());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_api_query() {
        let profile = QueryProfile {
            core_terms: vec!["nhs".to_string(), "national health service".to_string()],
            seed_terms: vec![],
        };
        assert_eq!(
            profile.api_query(),
            r#"("nhs") OR ("national health service")"#
        );
    }
}
