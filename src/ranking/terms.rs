// Seed-term expansion rules.
//
// A rule pairs a list of first terms with an optional list of second terms.
// With second terms, every first term is combined with every second term in
// both its singular and plural form:
//
//   [video] x [chat, call] -> video chat, video chats, video call, video calls
//
// Without second terms the first terms pass through unchanged.

use serde::{Deserialize, Serialize};

use super::plural::pluralize;

/// One seed-term expansion rule.
///
/// Serialized as `[[first..]]` or `[[first..], [second..]]`, the shape used
/// in query profile files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct SeedRule {
    pub first_terms: Vec<String>,
    pub second_terms: Vec<String>,
}

impl SeedRule {
    pub fn new(first_terms: &[&str], second_terms: &[&str]) -> Self {
        Self {
            first_terms: first_terms.iter().map(|t| t.to_string()).collect(),
            second_terms: second_terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// A rule with no second terms: its first terms are used verbatim.
    pub fn literal(terms: &[&str]) -> Self {
        Self::new(terms, &[])
    }
}

impl TryFrom<Vec<Vec<String>>> for SeedRule {
    type Error = String;

    fn try_from(mut lists: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        match lists.len() {
            1 => Ok(Self {
                first_terms: lists.remove(0),
                second_terms: Vec::new(),
            }),
            2 => {
                let second_terms = lists.remove(1);
                Ok(Self {
                    first_terms: lists.remove(0),
                    second_terms,
                })
            }
            n => Err(format!(
                "a seed rule needs one or two term lists, got {n}"
            )),
        }
    }
}

impl From<SeedRule> for Vec<Vec<String>> {
    fn from(rule: SeedRule) -> Self {
        if rule.second_terms.is_empty() {
            vec![rule.first_terms]
        } else {
            vec![rule.first_terms, rule.second_terms]
        }
    }
}

/// Expand a single rule into literal phrases.
pub fn expand_rule(rule: &SeedRule) -> Vec<String> {
    if rule.second_terms.is_empty() {
        return rule.first_terms.clone();
    }

    let mut phrases = Vec::with_capacity(rule.first_terms.len() * rule.second_terms.len() * 2);
    for first in &rule.first_terms {
        for second in &rule.second_terms {
            phrases.push(format!("{first} {second}"));
            phrases.push(format!("{first} {}", pluralize(second)));
        }
    }
    phrases
}

/// Expand every rule and flatten the results, keeping duplicates.
pub fn expand_terms(rules: &[SeedRule]) -> Vec<String> {
    rules.iter().flat_map(expand_rule).collect()
}
