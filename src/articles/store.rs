// JSON persistence for article corpora and ranking results.
//
// The acquisition step (outside this crate) caches each query's raw API
// records as a JSON array under `raw/<label>.json`. Ranking results go to
// `processed/filtered_<label>.json` as a position -> rank object.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::Article;
use crate::ranking::filter::RankedArticles;

/// Load a cached JSON array of articles.
pub fn load_articles(path: &Path) -> Result<Vec<Article>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read articles from {}", path.display()))?;
    let articles: Vec<Article> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of articles", path.display()))?;
    info!(path = %path.display(), articles = articles.len(), "Loaded article corpus");
    Ok(articles)
}

/// Write ranking results as JSON, creating parent directories as needed.
pub fn save_ranked(path: &Path, ranked: &RankedArticles) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string(ranked)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Read ranking results written by [`save_ranked`].
pub fn load_ranked(path: &Path) -> Result<RankedArticles> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rankings from {}", path.display()))?;
    Ok(serde_json::from_str(&raw)?)
}
