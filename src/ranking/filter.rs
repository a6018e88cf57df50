// Article relevance filter and ranker.
//
// Counts literal, case-folded substring occurrences of the core terms (the
// query used to fetch the corpus) and of the expanded seed phrases in each
// article's text. Articles below either minimum are dropped; survivors are
// ranked by
//
//   rank = core_count * seed_count / text_length_in_chars
//
// Substring counting is deliberate: "nhs" also matches inside "nhsx".

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::articles::Article;
use crate::error::{AnalysisError, AnalysisResult};

use super::terms::{expand_terms, SeedRule};

/// Minimum occurrence counts an article must reach to be ranked.
#[derive(Debug, Clone, PartialEq)]
pub struct RankConfig {
    pub min_core_df: usize,
    /// Defaults to `min_core_df` when unset.
    pub min_seed_df: Option<usize>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            min_core_df: 5,
            min_seed_df: None,
        }
    }
}

impl RankConfig {
    pub fn seed_threshold(&self) -> usize {
        self.min_seed_df.unwrap_or(self.min_core_df)
    }

    pub fn validate(&self) -> AnalysisResult<()> {
        if self.min_core_df < 1 {
            return Err(AnalysisError::InvalidConfig(
                "min_core_df must be at least 1".to_string(),
            ));
        }
        if self.min_seed_df == Some(0) {
            return Err(AnalysisError::InvalidConfig(
                "min_seed_df must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Rank per surviving article, keyed by the article's position in the input.
///
/// Serializes as a JSON object of position -> rank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedArticles {
    ranks: BTreeMap<usize, f64>,
}

impl RankedArticles {
    pub fn get(&self, position: usize) -> Option<f64> {
        self.ranks.get(&position).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.ranks.contains_key(&position)
    }

    /// (position, rank) pairs, highest rank first. Ties keep input order.
    pub fn by_rank_desc(&self) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self.ranks.iter().map(|(&i, &r)| (i, r)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// Filter and rank `articles`.
///
/// Duplicate titles are skipped entirely: only the first article carrying a
/// title is considered, even when that first one is later dropped.
pub fn filter_articles(
    articles: &[Article],
    core_terms: &[String],
    seed_rules: &[SeedRule],
    config: &RankConfig,
) -> RankedArticles {
    let core_terms = fold_terms(core_terms.iter().cloned());
    let seed_phrases = fold_terms(expand_terms(seed_rules));
    let min_seed_df = config.seed_threshold();

    debug!(
        core_terms = core_terms.len(),
        seed_phrases = seed_phrases.len(),
        min_core_df = config.min_core_df,
        min_seed_df,
        "Filtering articles"
    );

    let mut titles: HashSet<&str> = HashSet::new();
    let mut ranks = BTreeMap::new();

    for (position, article) in articles.iter().enumerate() {
        if !titles.insert(article.title.as_str()) {
            continue;
        }
        let Some(text) = article.body() else {
            continue;
        };
        let text = text.to_lowercase();

        let core_count = count_all(&text, &core_terms);
        if core_count < config.min_core_df {
            continue;
        }
        let seed_count = count_all(&text, &seed_phrases);
        if seed_count < min_seed_df {
            continue;
        }

        let length = text.chars().count();
        if length == 0 {
            continue;
        }
        ranks.insert(position, (core_count * seed_count) as f64 / length as f64);
    }

    info!(
        articles = articles.len(),
        kept = ranks.len(),
        "Ranked articles"
    );

    RankedArticles { ranks }
}

/// Non-overlapping occurrences of `term` in `text`.
pub fn count_occurrences(text: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    text.matches(term).count()
}

fn count_all(text: &str, terms: &[String]) -> usize {
    terms.iter().map(|term| count_occurrences(text, term)).sum()
}

fn fold_terms(terms: impl IntoIterator<Item = String>) -> Vec<String> {
    terms
        .into_iter()
        .map(|t| t.to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
