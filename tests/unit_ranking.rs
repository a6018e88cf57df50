// Unit tests for seed-term expansion, pluralization and the article ranker.
//
// Tests isolated pure functions: expand_terms examples, pluralize edge
// cases, and filter_articles exclusion and ranking properties.

use std::collections::HashSet;

use newsprobe::articles::Article;
use newsprobe::ranking::filter::{filter_articles, RankConfig};
use newsprobe::ranking::plural::pluralize;
use newsprobe::ranking::terms::{expand_terms, SeedRule};

fn article(title: &str, content: Option<&str>, description: Option<&str>) -> Article {
    Article {
        title: title.to_string(),
        content: content.map(String::from),
        description: description.map(String::from),
        ..Default::default()
    }
}

fn lenient() -> RankConfig {
    RankConfig {
        min_core_df: 1,
        min_seed_df: None,
    }
}

fn rank(articles: &[Article]) -> newsprobe::ranking::filter::RankedArticles {
    filter_articles(
        articles,
        &["nhs".to_string()],
        &[SeedRule::literal(&["app"])],
        &lenient(),
    )
}

// ============================================================
// expand_terms
// ============================================================

#[test]
fn expand_terms_pairs_with_plurals() {
    let expanded: HashSet<String> =
        expand_terms(&[SeedRule::new(&["video"], &["chat", "call"])]).into_iter().collect();
    let expected: HashSet<String> = ["video chat", "video chats", "video call", "video calls"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(expanded, expected);
}

#[test]
fn expand_terms_passes_through_without_second_terms() {
    let expanded = expand_terms(&[SeedRule::literal(&["video", "skype"])]);
    assert_eq!(expanded, vec!["video", "skype"]);
}

#[test]
fn pluralize_rules() {
    assert_eq!(pluralize("consultation"), "consultations");
    assert_eq!(pluralize("therapy"), "therapies");
    assert_eq!(pluralize("diagnosis"), "diagnoses");
    assert_eq!(pluralize("switch"), "switches");
    assert_eq!(pluralize("child"), "children");
    assert_eq!(pluralize("day"), "days");
}

// ============================================================
// filter_articles
// ============================================================

#[test]
fn rank_is_counts_over_length() {
    let ranked = rank(&[article("a", Some("NHS App"), None)]);
    let score = ranked.get(0).unwrap();
    assert!((score - 1.0 / 7.0).abs() < 1e-12);
}

#[test]
fn articles_without_text_are_excluded() {
    let ranked = rank(&[article("nhs app", None, None)]);
    assert!(ranked.is_empty());
}

#[test]
fn description_is_used_when_content_is_missing() {
    let ranked = rank(&[article("a", None, Some("nhs app"))]);
    assert!(ranked.contains(0));
}

#[test]
fn duplicate_titles_keep_first_occurrence_only() {
    let ranked = rank(&[
        article("same", Some("nothing relevant"), None),
        article("same", Some("nhs app"), None),
        article("other", Some("nhs app"), None),
    ]);
    assert!(!ranked.contains(0));
    assert!(!ranked.contains(1));
    assert!(ranked.contains(2));
}

#[test]
fn substrings_count() {
    let ranked = rank(&[article("a", Some("nhselection apps"), None)]);
    assert!(ranked.contains(0));
}

#[test]
fn thresholds_drop_sparse_articles() {
    let articles = [article("a", Some("nhs nhs app"), None)];
    let strict = RankConfig {
        min_core_df: 2,
        min_seed_df: Some(2),
    };
    let ranked = filter_articles(
        &articles,
        &["nhs".to_string()],
        &[SeedRule::literal(&["app"])],
        &strict,
    );
    assert!(ranked.is_empty());

    let core_only = RankConfig {
        min_core_df: 2,
        min_seed_df: Some(1),
    };
    let ranked = filter_articles(
        &articles,
        &["nhs".to_string()],
        &[SeedRule::literal(&["app"])],
        &core_only,
    );
    assert!(ranked.contains(0));
}

#[test]
fn rank_increases_with_core_count_at_fixed_length() {
    let ranked = rank(&[
        article("one", Some("nhs app zzz zzz"), None),
        article("two", Some("nhs app nhs zzz"), None),
    ]);
    assert!(ranked.get(1).unwrap() > ranked.get(0).unwrap());
}

#[test]
fn rank_decreases_with_length_at_fixed_counts() {
    let ranked = rank(&[
        article("short", Some("nhs app"), None),
        article("long", Some("nhs app and a great deal more text"), None),
    ]);
    assert!(ranked.get(0).unwrap() > ranked.get(1).unwrap());
    let order: Vec<usize> = ranked.by_rank_desc().into_iter().map(|(p, _)| p).collect();
    assert_eq!(order, vec![0, 1]);
}
