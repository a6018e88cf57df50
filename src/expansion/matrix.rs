// Term-document count matrices over a fitted vocabulary.
//
// The vocabulary is fitted once on the full (background) corpus. Every matrix
// produced afterwards shares its column indexing, so per-column statistics of
// a foreground subset line up with the background. Terms the vocabulary has
// never seen are silently dropped at transform time, never added.
//
// Documents arrive already tokenized and space-joined, so analysis here is a
// plain whitespace split.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};

/// Frequency bounds and counting mode for vocabulary fitting.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorizerConfig {
    /// Drop terms present in more than this fraction of documents, in (0, 1].
    pub max_df: f64,
    /// Drop terms present in fewer than this many documents.
    pub min_df: usize,
    /// Keep at most this many terms, by descending corpus frequency.
    pub max_features: Option<usize>,
    /// Collapse counts to presence (1/0).
    pub binary: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_df: 1.0,
            min_df: 1,
            max_features: None,
            binary: false,
        }
    }
}

impl VectorizerConfig {
    pub fn validate(&self) -> AnalysisResult<()> {
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(AnalysisError::InvalidConfig(format!(
                "max_df must be in (0, 1], got {}",
                self.max_df
            )));
        }
        if self.min_df < 1 {
            return Err(AnalysisError::InvalidConfig(
                "min_df must be at least 1".to_string(),
            ));
        }
        if self.max_features == Some(0) {
            return Err(AnalysisError::InvalidConfig(
                "max_features must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Term to column index mapping, in alphabetical term order.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    terms: IndexMap<String, usize>,
}

impl Vocabulary {
    /// Fit a vocabulary on `docs`, applying the frequency bounds in `config`.
    pub fn fit<S: AsRef<str>>(docs: &[S], config: &VectorizerConfig) -> AnalysisResult<Self> {
        config.validate()?;

        // term -> (document frequency, corpus frequency)
        let mut stats: HashMap<&str, (usize, u64)> = HashMap::new();
        for doc in docs {
            for (term, count) in count_terms(doc.as_ref()) {
                let entry = stats.entry(term).or_insert((0, 0));
                entry.0 += 1;
                entry.1 += count as u64;
            }
        }

        let max_doc_count = config.max_df * docs.len() as f64;
        let mut kept: Vec<(&str, u64)> = stats
            .into_iter()
            .filter(|(_, (df, _))| *df >= config.min_df && (*df as f64) <= max_doc_count)
            .map(|(term, (_, tf))| (term, tf))
            .collect();

        if let Some(limit) = config.max_features {
            kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            kept.truncate(limit);
        }

        if kept.is_empty() {
            return Err(AnalysisError::EmptyVocabulary);
        }

        let mut terms: Vec<&str> = kept.into_iter().map(|(term, _)| term).collect();
        terms.sort_unstable();

        debug!(
            documents = docs.len(),
            terms = terms.len(),
            "Fitted vocabulary"
        );

        Ok(Self {
            terms: terms
                .into_iter()
                .enumerate()
                .map(|(idx, term)| (term.to_string(), idx))
                .collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column index of `term`, if it survived fitting.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get(term).copied()
    }

    /// Term at column `column`.
    pub fn term(&self, column: usize) -> Option<&str> {
        self.terms.get_index(column).map(|(term, _)| term.as_str())
    }

    /// Terms in column order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(|t| t.as_str())
    }

    /// Count vocabulary terms in each document. Unknown terms are ignored.
    pub fn transform<S: AsRef<str>>(&self, docs: &[S], binary: bool) -> CountMatrix {
        let rows = docs
            .iter()
            .map(|doc| {
                let mut row: Vec<(usize, u32)> = count_terms(doc.as_ref())
                    .into_iter()
                    .filter_map(|(term, count)| {
                        self.index_of(term)
                            .map(|col| (col, if binary { 1 } else { count }))
                    })
                    .collect();
                row.sort_unstable_by_key(|(col, _)| *col);
                row
            })
            .collect();

        CountMatrix {
            rows,
            n_cols: self.len(),
        }
    }
}

/// Sparse non-negative count matrix: one row per document, one column per
/// vocabulary term. Rows store only non-zero entries, sorted by column.
#[derive(Debug, Clone, PartialEq)]
pub struct CountMatrix {
    rows: Vec<Vec<(usize, u32)>>,
    n_cols: usize,
}

impl CountMatrix {
    /// Build from a dense row-major table. Rows shorter than the widest one
    /// are treated as zero-padded.
    pub fn from_dense(dense: &[Vec<u32>]) -> Self {
        let n_cols = dense.iter().map(|r| r.len()).max().unwrap_or(0);
        let rows = dense
            .iter()
            .map(|r| {
                r.iter()
                    .enumerate()
                    .filter(|(_, &v)| v > 0)
                    .map(|(col, &v)| (col, v))
                    .collect()
            })
            .collect();
        Self { rows, n_cols }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.rows
            .get(row)
            .and_then(|r| r.binary_search_by_key(&col, |(c, _)| *c).ok().map(|i| r[i].1))
            .unwrap_or(0)
    }

    /// Sum of each column across all rows.
    pub fn column_sums(&self) -> Vec<u64> {
        let mut sums = vec![0u64; self.n_cols];
        for row in &self.rows {
            for &(col, count) in row {
                sums[col] += count as u64;
            }
        }
        sums
    }

    /// Sum of every entry.
    pub fn total(&self) -> u64 {
        self.rows
            .iter()
            .flat_map(|r| r.iter().map(|(_, c)| *c as u64))
            .sum()
    }
}

/// A fitted vectorizer: the vocabulary plus the counting mode used for every
/// matrix derived from it.
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    vocabulary: Vocabulary,
    binary: bool,
}

impl CountVectorizer {
    pub fn fit<S: AsRef<str>>(docs: &[S], config: &VectorizerConfig) -> AnalysisResult<Self> {
        Ok(Self {
            vocabulary: Vocabulary::fit(docs, config)?,
            binary: config.binary,
        })
    }

    /// Fit on `docs` and return the background matrix over the same docs.
    pub fn fit_transform<S: AsRef<str>>(
        docs: &[S],
        config: &VectorizerConfig,
    ) -> AnalysisResult<(Self, CountMatrix)> {
        let vectorizer = Self::fit(docs, config)?;
        let matrix = vectorizer.transform(docs);
        Ok((vectorizer, matrix))
    }

    pub fn transform<S: AsRef<str>>(&self, docs: &[S]) -> CountMatrix {
        self.vocabulary.transform(docs, self.binary)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

fn count_terms(doc: &str) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for term in doc.split_whitespace() {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}
