// Multi-word phrase detection.
//
// Each stage trains a bigram scorer on the current token streams and merges
// adjacent pairs that co-occur far more often than chance into `a_b` tokens.
// Running stage k on the output of stage k-1 yields phrases up to k words
// (`a_b_c` at order 3). Phrase tokens are appended to a fresh copy of each
// document; the unmerged tokens are kept.
//
// Pair score, for pair count c_ab, word counts c_a and c_b and vocabulary
// size V (unigrams plus bigrams seen in training):
//
//   score = (c_ab - min_count) / (c_a * c_b) * V
//
// A pair is merged when its score exceeds the threshold.

use std::collections::HashMap;

use tracing::debug;

use super::tokenizer::Tokenizer;

#[derive(Debug, Clone, PartialEq)]
pub struct PhraseConfig {
    /// Longest phrase, in words. Orders below 2 disable detection.
    pub max_order: usize,
    /// Cap `min_count` at this fraction of the corpus size.
    pub min_frac: f64,
    pub min_count: usize,
    pub threshold: f64,
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            max_order: 3,
            min_frac: 0.1,
            min_count: 100,
            threshold: 10.0,
        }
    }
}

impl PhraseConfig {
    /// Pair count floor for a corpus of `n_docs` documents, never below 2.
    pub fn effective_min_count(&self, n_docs: usize) -> usize {
        let frac_count = (self.min_frac * n_docs as f64) as usize;
        self.min_count.min(frac_count).max(2)
    }
}

struct BigramScorer {
    words: HashMap<String, usize>,
    pairs: HashMap<(String, String), usize>,
    min_count: usize,
    threshold: f64,
}

impl BigramScorer {
    fn train(streams: &[Vec<String>], min_count: usize, threshold: f64) -> Self {
        let mut words = HashMap::new();
        let mut pairs = HashMap::new();
        for stream in streams {
            for token in stream {
                *words.entry(token.clone()).or_insert(0) += 1;
            }
            for pair in stream.windows(2) {
                *pairs
                    .entry((pair[0].clone(), pair[1].clone()))
                    .or_insert(0) += 1;
            }
        }
        Self {
            words,
            pairs,
            min_count,
            threshold,
        }
    }

    fn score(&self, a: &str, b: &str) -> f64 {
        let pair = self
            .pairs
            .get(&(a.to_string(), b.to_string()))
            .copied()
            .unwrap_or(0);
        if pair < self.min_count {
            return f64::NEG_INFINITY;
        }
        let (Some(&count_a), Some(&count_b)) = (self.words.get(a), self.words.get(b)) else {
            return f64::NEG_INFINITY;
        };
        let vocab = (self.words.len() + self.pairs.len()) as f64;
        (pair - self.min_count) as f64 / (count_a * count_b) as f64 * vocab
    }

    /// Greedily merge qualifying pairs left to right. Returns the merged
    /// stream and the phrases created.
    fn merge(&self, stream: &[String]) -> (Vec<String>, Vec<String>) {
        let mut merged = Vec::with_capacity(stream.len());
        let mut phrases = Vec::new();
        let mut i = 0;
        while i < stream.len() {
            if i + 1 < stream.len() && self.score(&stream[i], &stream[i + 1]) > self.threshold {
                let phrase = format!("{}_{}", stream[i], stream[i + 1]);
                phrases.push(phrase.clone());
                merged.push(phrase);
                i += 2;
            } else {
                merged.push(stream[i].clone());
                i += 1;
            }
        }
        (merged, phrases)
    }
}

/// Append detected phrases (orders 2..=max_order) to each document.
///
/// Phrases made up entirely of stop words are dropped.
pub fn detect_phrases(
    docs: &[Vec<String>],
    config: &PhraseConfig,
    tokenizer: &Tokenizer,
) -> Vec<Vec<String>> {
    let min_count = config.effective_min_count(docs.len());
    let mut streams: Vec<Vec<String>> = docs.to_vec();
    let mut output: Vec<Vec<String>> = docs.to_vec();

    for order in 2..=config.max_order {
        let scorer = BigramScorer::train(&streams, min_count, config.threshold);
        let mut found = 0;
        let mut next = Vec::with_capacity(streams.len());
        for (stream, doc) in streams.iter().zip(output.iter_mut()) {
            let (merged, phrases) = scorer.merge(stream);
            found += phrases.len();
            doc.extend(phrases.into_iter().filter(|p| !tokenizer.is_stop_word(p)));
            next.push(merged);
        }
        streams = next;
        debug!(order, min_count, phrases = found, "Phrase detection stage");
    }

    output
}
