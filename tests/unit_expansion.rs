// Unit tests for the term-document matrix, JLH scoring and keyword expansion.
//
// Tests isolated pure functions: vocabulary fitting bounds, matrix_fraction
// and jlh numerical properties, and expand_keywords error taxonomy.

use newsprobe::error::AnalysisError;
use newsprobe::expansion::expander::{expand_keywords, ExpansionConfig};
use newsprobe::expansion::jlh::{jlh, matrix_fraction};
use newsprobe::expansion::matrix::{CountMatrix, CountVectorizer, VectorizerConfig, Vocabulary};

fn tokens(raw: &[&str]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|d| d.split_whitespace().map(String::from).collect())
        .collect()
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-12, "expected {expected:?}, got {actual:?}");
    }
}

// ============================================================
// Vocabulary fitting
// ============================================================

#[test]
fn vocabulary_is_sorted() {
    let vocab = Vocabulary::fit(&["strike nhs staff", "app nhs"], &VectorizerConfig::default()).unwrap();
    let terms: Vec<&str> = vocab.terms().collect();
    assert_eq!(terms, vec!["app", "nhs", "staff", "strike"]);
}

#[test]
fn vocabulary_max_df_drops_common_terms() {
    let config = VectorizerConfig {
        max_df: 0.5,
        ..Default::default()
    };
    let vocab = Vocabulary::fit(&["b a a", "c a", "b"], &config).unwrap();
    let terms: Vec<&str> = vocab.terms().collect();
    assert_eq!(terms, vec!["c"]);
}

#[test]
fn vocabulary_min_df_drops_rare_terms() {
    let config = VectorizerConfig {
        min_df: 2,
        ..Default::default()
    };
    let vocab = Vocabulary::fit(&["b a a", "c a", "b"], &config).unwrap();
    let terms: Vec<&str> = vocab.terms().collect();
    assert_eq!(terms, vec!["a", "b"]);
}

#[test]
fn vocabulary_max_features_keeps_most_frequent() {
    let config = VectorizerConfig {
        max_features: Some(2),
        ..Default::default()
    };
    let vocab = Vocabulary::fit(&["b a a", "c a", "b"], &config).unwrap();
    let terms: Vec<&str> = vocab.terms().collect();
    assert_eq!(terms, vec!["a", "b"]);
}

#[test]
fn vocabulary_empty_after_bounds() {
    let config = VectorizerConfig {
        min_df: 5,
        ..Default::default()
    };
    assert_eq!(
        Vocabulary::fit(&["a b", "c"], &config).unwrap_err(),
        AnalysisError::EmptyVocabulary
    );
}

#[test]
fn transform_drops_unseen_terms() {
    let (vectorizer, _) =
        CountVectorizer::fit_transform(&["nhs app", "nhs staff"], &VectorizerConfig::default())
            .unwrap();
    let matrix = vectorizer.transform(&["nhs nhs football"]);
    assert_eq!(matrix.n_rows(), 1);
    assert_eq!(matrix.n_cols(), 3);
    assert_eq!(matrix.total(), 2);
}

#[test]
fn binary_counts_presence() {
    let config = VectorizerConfig {
        binary: true,
        ..Default::default()
    };
    let (_, matrix) = CountVectorizer::fit_transform(&["nhs nhs nhs app"], &config).unwrap();
    assert_eq!(matrix.column_sums(), vec![1, 1]);
}

// ============================================================
// matrix_fraction / jlh
// ============================================================

#[test]
fn matrix_fraction_sums_to_one() {
    let matrix = CountMatrix::from_dense(&[vec![1, 1, 2], vec![0, 0, 2]]);
    let fractions = matrix_fraction(&matrix).unwrap();
    assert_close(&fractions, &[1.0 / 6.0, 1.0 / 6.0, 4.0 / 6.0]);
    assert!((fractions.iter().sum::<f64>() - 1.0).abs() < 1e-12);
}

#[test]
fn matrix_fraction_of_zero_matrix_fails() {
    let matrix = CountMatrix::from_dense(&[vec![0, 0]]);
    assert_eq!(matrix_fraction(&matrix).unwrap_err(), AnalysisError::ZeroTotal);
}

#[test]
fn jlh_golden_scores() {
    let fg = CountMatrix::from_dense(&[vec![1, 1, 2], vec![0, 0, 2]]);
    let bg = CountMatrix::from_dense(&[vec![1, 2, 2], vec![1, 0, 2]]);
    let scores = jlh(&fg, &bg).unwrap();
    assert_close(&scores, &[-8.0 / 144.0, -8.0 / 144.0, 32.0 / 144.0]);
}

#[test]
fn jlh_identical_distributions_score_zero() {
    let fg = CountMatrix::from_dense(&[vec![2, 4, 6]]);
    let bg = CountMatrix::from_dense(&[vec![1, 2, 3], vec![3, 6, 9]]);
    for score in jlh(&fg, &bg).unwrap() {
        assert_eq!(score, 0.0);
    }
}

#[test]
fn jlh_zero_background_column_fails() {
    let fg = CountMatrix::from_dense(&[vec![1, 0]]);
    let bg = CountMatrix::from_dense(&[vec![1, 0]]);
    assert_eq!(
        jlh(&fg, &bg).unwrap_err(),
        AnalysisError::DivisionByZero { column: 1 }
    );
}

// ============================================================
// expand_keywords
// ============================================================

#[test]
fn expansion_requires_a_foreground() {
    let docs = tokens(&["nhs app", "nhs staff"]);
    let err = expand_keywords(&docs, "football", &ExpansionConfig::default()).unwrap_err();
    assert_eq!(err, AnalysisError::EmptyForeground);
}

#[test]
fn expansion_is_deterministic() {
    let docs = tokens(&[
        "video consultation gp patients",
        "video call gp",
        "budget parliament nhs",
        "nhs staff strike",
        "nhs video",
    ]);
    let config = ExpansionConfig::default();
    let first = expand_keywords(&docs, "video", &config).unwrap();
    let second = expand_keywords(&docs, "video", &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.foreground_size, 3);
    assert!(first.keywords.contains_key("video"));
}

#[test]
fn keywords_beat_the_cutoff_in_descending_order() {
    let docs = tokens(&[
        "video consultation gp patients",
        "video call gp",
        "budget parliament nhs",
        "nhs staff strike",
        "nhs video",
    ]);
    let expansion = expand_keywords(&docs, "video", &ExpansionConfig::default()).unwrap();
    let scores: Vec<f64> = expansion.keywords.values().copied().collect();
    assert!(scores.iter().all(|&s| s > expansion.cutoff));
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert!(!expansion.keywords.contains_key("parliament"));
}
