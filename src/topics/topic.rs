// Topic summaries: what a corpus is about, as weighted groups of terms.

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Topics discovered in a corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSummary {
    /// Highest weight first
    pub topics: Vec<Topic>,
    pub document_count: usize,
}

/// A group of related terms with a label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub label: String,
    /// Terms in descending score order
    pub terms: Vec<String>,
    /// Share of the total term score, 0.0 to 1.0
    pub weight: f64,
}

impl TopicSummary {
    /// Print the topics as a bar chart.
    pub fn display(&self) {
        println!(
            "\n{}",
            format!("=== Topics ({} documents) ===", self.document_count).bold()
        );
        println!();

        let bar_width: usize = 20;

        for (i, topic) in self.topics.iter().enumerate() {
            let filled = (topic.weight * bar_width as f64).round() as usize;
            let bar = format!(
                "[{}{}]",
                "=".repeat(filled),
                " ".repeat(bar_width.saturating_sub(filled))
            );

            let colored_bar = if topic.weight >= 0.25 {
                bar.bright_green()
            } else if topic.weight >= 0.10 {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };

            println!(
                "  {:>2}. {:<40} {} {:.2}",
                i + 1,
                topic.label.bold(),
                colored_bar,
                topic.weight
            );
            println!("      Terms: {}", topic.terms.join(", ").dimmed());
            println!();
        }
    }

    /// Topic labels joined with `__`, a compact name for file labels.
    pub fn slug(&self, max_topics: usize) -> String {
        self.topics
            .iter()
            .take(max_topics)
            .map(|t| t.terms.first().map(String::as_str).unwrap_or(""))
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("__")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_uses_leading_terms() {
        let summary = TopicSummary {
            topics: vec![
                Topic {
                    label: "nhs / app".to_string(),
                    terms: vec!["nhs".to_string(), "app".to_string()],
                    weight: 0.6,
                },
                Topic {
                    label: "empty".to_string(),
                    terms: vec![],
                    weight: 0.1,
                },
                Topic {
                    label: "covid".to_string(),
                    terms: vec!["covid".to_string()],
                    weight: 0.3,
                },
            ],
            document_count: 3,
        };
        assert_eq!(summary.slug(3), "nhs__covid");
        assert_eq!(summary.slug(1), "nhs");
    }
}
