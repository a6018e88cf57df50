// Corpus preparation: articles to token streams.
//
// Tokenizes every article with the shared tokenizer, showing a progress bar
// for large corpora, then optionally appends detected multi-word phrases.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::articles::Article;
use crate::text::phrases::{detect_phrases, PhraseConfig};
use crate::text::{TextField, Tokenizer};

/// Tokenize `articles` and, when `phrases` is given, append phrase tokens.
pub fn prepare_corpus(
    articles: &[Article],
    field: TextField,
    tokenizer: &Tokenizer,
    phrases: Option<&PhraseConfig>,
) -> Result<Vec<Vec<String>>> {
    let pb = ProgressBar::new(articles.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar().template("  Tokenizing [{bar:30}] {pos}/{len} ({eta})")?,
    );

    let mut docs = Vec::with_capacity(articles.len());
    for article in articles {
        docs.push(tokenizer.tokenize_article(article, field));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let token_count: usize = docs.iter().map(Vec::len).sum();
    info!(
        documents = docs.len(),
        tokens = token_count,
        stemmed = tokenizer.stems(),
        "Tokenized corpus"
    );

    match phrases {
        Some(config) if config.max_order >= 2 => {
            let with_phrases = detect_phrases(&docs, config, tokenizer);
            let added: usize = with_phrases.iter().map(Vec::len).sum::<usize>() - token_count;
            info!(phrases = added, max_order = config.max_order, "Detected phrases");
            Ok(with_phrases)
        }
        _ => Ok(docs),
    }
}
