// Ranked article reports.
//
// Rows are built from the ranking results and the article list they index,
// highest rank first, one row per title. Reports are written as a markdown
// table for reading and as JSON for downstream tools.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::articles::Article;
use crate::ranking::filter::RankedArticles;

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// dd/mm/yyyy, or the raw timestamp if it could not be parsed
    pub published_at: String,
    pub score: f64,
    pub source: String,
    pub title: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: String,
}

/// Build report rows for `ranked`, which must index into `articles`.
///
/// Positions outside `articles` are skipped.
pub fn build_report(ranked: &RankedArticles, articles: &[Article]) -> Vec<ReportRow> {
    let mut seen = std::collections::HashSet::new();
    ranked
        .by_rank_desc()
        .into_iter()
        .filter_map(|(position, score)| articles.get(position).map(|a| (a, score)))
        .filter(|(article, _)| seen.insert(article.title.clone()))
        .map(|(article, score)| ReportRow {
            published_at: format_date(&article.published_at),
            score,
            source: article.source.name.clone(),
            title: article.title.clone(),
            author: article.author.clone(),
            description: article.description.clone(),
            content: article.content.clone(),
            url: article.url.clone(),
        })
        .collect()
}

/// Reformat an API timestamp (`2020-03-14T09:30:00Z`) as `14/03/2020`.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%SZ") {
        Ok(dt) => dt.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Render rows as a markdown document.
pub fn render_markdown(title: &str, rows: &[ReportRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {title}\n");
    let _ = writeln!(out, "{} articles, highest rank first.\n", rows.len());
    let _ = writeln!(out, "| # | Published | Score | Source | Title | Author |");
    let _ = writeln!(out, "|---|---|---|---|---|---|");
    for (i, row) in rows.iter().enumerate() {
        let title = if row.url.is_empty() {
            escape_cell(&row.title)
        } else {
            format!("[{}]({})", escape_cell(&row.title), row.url)
        };
        let _ = writeln!(
            out,
            "| {} | {} | {:.5} | {} | {} | {} |",
            i + 1,
            row.published_at,
            row.score,
            escape_cell(&row.source),
            title,
            escape_cell(row.author.as_deref().unwrap_or("")),
        );
    }
    out
}

/// Write `rows` as `<stem>.md` and `<stem>.json` inside `dir`. Returns the
/// markdown path.
pub fn write_report(dir: &Path, stem: &str, rows: &[ReportRow]) -> Result<String> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report directory {}", dir.display()))?;

    let md_path = dir.join(format!("{stem}.md"));
    std::fs::write(&md_path, render_markdown(stem, rows))
        .with_context(|| format!("Failed to write {}", md_path.display()))?;

    let json_path = dir.join(format!("{stem}.json"));
    std::fs::write(&json_path, serde_json::to_string_pretty(rows)?)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;

    Ok(md_path.display().to_string())
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
