// Colored terminal output for expansions and ranked articles.
//
// This module handles all terminal-specific formatting: colors and tables.
// The main.rs command handlers delegate here.

use colored::Colorize;

use crate::articles::Article;
use crate::expansion::expander::Expansion;
use crate::ranking::filter::RankedArticles;

/// Display the keywords and unkeywords of an expansion.
pub fn display_expansion(seed: &str, expansion: &Expansion) {
    println!(
        "\n{}",
        format!("=== Keywords for \"{seed}\" ===").bold()
    );
    println!(
        "  {} foreground documents, {} terms, cutoff {:.4}",
        expansion.foreground_size,
        expansion.vocabulary_size,
        expansion.cutoff
    );
    println!();

    if expansion.keywords.is_empty() {
        println!("  {}", "No terms scored above the cutoff.".dimmed());
    }
    for (i, (term, score)) in expansion.keywords.iter().enumerate() {
        println!("  {:>4}. {:<36} {}", i + 1, term, colorize_score(*score));
    }

    if !expansion.unkeywords.is_empty() {
        println!("\n{}", "=== Unkeywords (least associated) ===".bold());
        println!();
        for (term, score) in &expansion.unkeywords {
            println!("        {:<36} {}", term, colorize_score(*score));
        }
    }
    println!();
}

/// Display up to `top` ranked articles, highest rank first.
pub fn display_ranked(ranked: &RankedArticles, articles: &[Article], top: usize) {
    if ranked.is_empty() {
        println!("No articles passed the relevance filter.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Ranked Articles ({} of {}) ===",
            ranked.len(),
            articles.len()
        )
        .bold()
    );
    println!();
    println!(
        "  {:>4}  {:>9}  {:<24} {}",
        "Rank".dimmed(),
        "Score".dimmed(),
        "Source".dimmed(),
        "Title".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, (position, rank)) in ranked.by_rank_desc().into_iter().take(top).enumerate() {
        let Some(article) = articles.get(position) else {
            continue;
        };
        println!(
            "  {:>4}. {:>9.5}  {:<24} {}",
            i + 1,
            rank,
            super::truncate_chars(&article.source.name, 22),
            super::truncate_chars(&article.title, 80),
        );
    }

    if ranked.len() > top {
        println!(
            "\n  {}",
            format!("... and {} more", ranked.len() - top).dimmed()
        );
    }
    println!();
}

/// Positive association in green, negative in red.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:>10.5}");
    if score > 0.0 {
        text.green()
    } else if score < 0.0 {
        text.red()
    } else {
        text.dimmed()
    }
}
