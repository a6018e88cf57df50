// Keyword expansion from seed terms.
//
// Partition the corpus into a foreground (documents containing every seed
// term) and the full background, fit one vocabulary on the background, score
// every term with JLH and keep those scoring above a fraction of the best
// seed term's score. The most negatively scored terms come back as
// "unkeywords": vocabulary that signals a document is off-topic.

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::error::{AnalysisError, AnalysisResult};

use super::jlh::jlh;
use super::matrix::{CountVectorizer, VectorizerConfig};

/// Tuning for a single expansion run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionConfig {
    pub vectorizer: VectorizerConfig,
    /// Keywords must score above `threshold * max(seed term scores)`.
    pub threshold: f64,
    /// How many unkeywords to return.
    pub n_unkeywords: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            vectorizer: VectorizerConfig::default(),
            threshold: 0.3,
            n_unkeywords: 10,
        }
    }
}

impl ExpansionConfig {
    pub fn validate(&self) -> AnalysisResult<()> {
        self.vectorizer.validate()?;
        if !(self.threshold > 0.0) {
            return Err(AnalysisError::InvalidConfig(format!(
                "threshold must be positive, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Result of expanding a seed phrase against a corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    /// Terms scoring above the cutoff, highest score first.
    pub keywords: IndexMap<String, f64>,
    /// The most negatively scored terms, most negative first.
    pub unkeywords: IndexMap<String, f64>,
    /// The score a keyword had to beat.
    pub cutoff: f64,
    /// Number of documents containing every seed term.
    pub foreground_size: usize,
    /// Number of terms in the fitted vocabulary.
    pub vocabulary_size: usize,
}

/// Expand `seed_phrase` (whitespace-delimited terms) into related keywords.
///
/// Every seed term must itself survive vocabulary fitting; a pruned seed term
/// fails with `UnknownTerm` instead of being scored from outside the matrix.
pub fn expand_keywords(
    docs: &[Vec<String>],
    seed_phrase: &str,
    config: &ExpansionConfig,
) -> AnalysisResult<Expansion> {
    config.validate()?;

    let seed_terms: Vec<&str> = seed_phrase.split_whitespace().collect();
    if seed_terms.is_empty() {
        return Err(AnalysisError::NoSeedTerms);
    }

    let joined: Vec<String> = docs.iter().map(|doc| doc.join(" ")).collect();
    let foreground_docs: Vec<&str> = docs
        .iter()
        .zip(&joined)
        .filter(|(doc, _)| seed_terms.iter().all(|term| doc.iter().any(|t| t == term)))
        .map(|(_, text)| text.as_str())
        .collect();

    if foreground_docs.is_empty() {
        return Err(AnalysisError::EmptyForeground);
    }

    let (vectorizer, background) = CountVectorizer::fit_transform(&joined, &config.vectorizer)?;
    let foreground = vectorizer.transform(&foreground_docs);
    let vocabulary = vectorizer.vocabulary();

    let seed_columns = seed_terms
        .iter()
        .map(|term| {
            vocabulary
                .index_of(term)
                .ok_or_else(|| AnalysisError::UnknownTerm(term.to_string()))
        })
        .collect::<AnalysisResult<Vec<usize>>>()?;

    let scores = jlh(&foreground, &background)?;

    let best_seed = seed_columns
        .iter()
        .map(|&column| scores[column])
        .fold(f64::NEG_INFINITY, f64::max);
    let cutoff = config.threshold * best_seed;

    debug!(
        seed = seed_phrase,
        best_seed, cutoff, "Computed keyword significance cutoff"
    );

    // Stable sorts keep vocabulary order among equal scores.
    let mut columns: Vec<usize> = (0..scores.len()).collect();
    columns.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    let keywords: IndexMap<String, f64> = columns
        .iter()
        .filter(|&&col| scores[col] > cutoff)
        .filter_map(|&col| vocabulary.term(col).map(|t| (t.to_string(), scores[col])))
        .collect();

    columns.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]).then(a.cmp(&b)));
    let unkeywords: IndexMap<String, f64> = columns
        .iter()
        .take(config.n_unkeywords)
        .filter_map(|&col| vocabulary.term(col).map(|t| (t.to_string(), scores[col])))
        .collect();

    info!(
        seed = seed_phrase,
        foreground = foreground_docs.len(),
        background = docs.len(),
        vocabulary = vocabulary.len(),
        keywords = keywords.len(),
        "Expanded keywords"
    );

    Ok(Expansion {
        keywords,
        unkeywords,
        cutoff,
        foreground_size: foreground_docs.len(),
        vocabulary_size: vocabulary.len(),
    })
}
