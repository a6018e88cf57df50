// TF-IDF topic model.
//
// Ranks terms across the corpus with the `keyword_extraction` TF-IDF
// implementation (each document is its own IDF unit), then groups terms that
// appear in the same documents. Each group seeds from the highest-ranked
// unassigned term and pulls in its strongest co-occurring neighbours.

use std::collections::HashSet;

use anyhow::Result;
use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::info;

use super::topic::{Topic, TopicSummary};
use super::traits::TopicModel;

pub struct TfIdfTopics {
    /// Terms to rank before grouping
    pub top_n_terms: usize,
    pub max_topics: usize,
    /// Upper bound on terms per topic, seed included
    pub terms_per_topic: usize,
}

impl Default for TfIdfTopics {
    fn default() -> Self {
        Self {
            top_n_terms: 60,
            max_topics: 10,
            terms_per_topic: 6,
        }
    }
}

impl TopicModel for TfIdfTopics {
    fn discover(&self, docs: &[Vec<String>]) -> Result<TopicSummary> {
        let joined: Vec<String> = docs
            .iter()
            .filter(|d| !d.is_empty())
            .map(|d| d.join(" "))
            .collect();
        if joined.is_empty() {
            anyhow::bail!("No tokens to analyze; cannot discover topics in an empty corpus");
        }

        let stop_words: Vec<String> = get(LANGUAGE::English);
        let params = TfIdfParams::UnprocessedDocuments(&joined, &stop_words, None);
        let ranked: Vec<(String, f32)> = TfIdf::new(params).get_ranked_word_scores(self.top_n_terms);

        if ranked.is_empty() {
            anyhow::bail!(
                "TF-IDF ranked no terms across {} documents; documents may be too short",
                joined.len()
            );
        }

        info!(
            terms = ranked.len(),
            top_term = &ranked[0].0,
            top_score = ranked[0].1,
            "Ranked TF-IDF terms"
        );

        let doc_sets: Vec<HashSet<&str>> = docs
            .iter()
            .map(|d| d.iter().map(String::as_str).collect())
            .collect();
        let topics = group_terms(&ranked, &doc_sets, self.max_topics, self.terms_per_topic);

        Ok(TopicSummary {
            topics,
            document_count: docs.len(),
        })
    }
}

/// Greedy co-occurrence grouping of ranked terms.
fn group_terms(
    ranked: &[(String, f32)],
    doc_sets: &[HashSet<&str>],
    max_topics: usize,
    terms_per_topic: usize,
) -> Vec<Topic> {
    let n = ranked.len();

    // Which ranked terms each document contains
    let doc_terms: Vec<Vec<usize>> = doc_sets
        .iter()
        .map(|set| {
            (0..n)
                .filter(|&i| set.contains(ranked[i].0.as_str()))
                .collect()
        })
        .collect();

    let mut cooccurrence = vec![vec![0u32; n]; n];
    for terms in &doc_terms {
        for &i in terms {
            for &j in terms {
                if i != j {
                    cooccurrence[i][j] += 1;
                }
            }
        }
    }

    let total_score: f64 = ranked.iter().map(|(_, s)| *s as f64).sum();
    let mut assigned = vec![false; n];
    let mut topics = Vec::new();

    for seed in 0..n {
        if topics.len() >= max_topics {
            break;
        }
        if assigned[seed] {
            continue;
        }
        assigned[seed] = true;

        let mut neighbours: Vec<(usize, u32)> = (0..n)
            .filter(|&i| !assigned[i] && cooccurrence[seed][i] > 0)
            .map(|i| (i, cooccurrence[seed][i]))
            .collect();
        neighbours.sort_by(|a, b| b.1.cmp(&a.1));

        let mut members = vec![seed];
        for (idx, _) in neighbours
            .into_iter()
            .take(terms_per_topic.saturating_sub(1))
        {
            assigned[idx] = true;
            members.push(idx);
        }

        let score: f64 = members.iter().map(|&i| ranked[i].1 as f64).sum();
        let terms: Vec<String> = members.iter().map(|&i| ranked[i].0.clone()).collect();

        topics.push(Topic {
            label: terms.iter().take(3).cloned().collect::<Vec<_>>().join(" / "),
            terms,
            weight: if total_score > 0.0 {
                score / total_score
            } else {
                0.0
            },
        });
    }

    let weight_sum: f64 = topics.iter().map(|t| t.weight).sum();
    if weight_sum > 0.0 {
        for topic in &mut topics {
            topic.weight /= weight_sum;
        }
    }

    topics.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    topics
}
