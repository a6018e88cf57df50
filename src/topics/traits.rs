// Topic model trait: swap-ready abstraction.
//
// Topic discovery consumes the same tokenized documents as keyword expansion.
// The default implementation groups TF-IDF terms by co-occurrence; a
// probabilistic model can replace it without touching the CLI.

use super::topic::TopicSummary;
use anyhow::Result;

/// Trait for discovering topics in a tokenized corpus.
pub trait TopicModel {
    /// Analyze tokenized documents and summarize their topics.
    fn discover(&self, docs: &[Vec<String>]) -> Result<TopicSummary>;
}
