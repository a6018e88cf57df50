// Article tokenizer.
//
// The tokenizer is an explicit handle: build it once with `Tokenizer::english()`
// and pass it by reference to everything that needs normalized tokens. It owns
// the stop-word list, the word pattern and (optionally) an English stemmer, so
// there is no process-wide model state.
//
// Pipeline per document:
//   lowercase -> \w+ words -> drop numerals -> drop stop words -> stem -> drop 1-char tokens

use std::collections::HashSet;

use anyhow::Result;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use stop_words::{get, LANGUAGE};

use crate::articles::Article;

/// Leftovers from HTML entities and list markup that survive text extraction.
const HTML_STOP_WORDS: &[&str] = &[
    "nbsp", "amp", "gt", "lt", "quot", "apos", "td", "tr", "li", "ul", "al",
];

/// Which article field to tokenize first. Missing fields fall back to
/// content, then description, then title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TextField {
    #[default]
    Content,
    Description,
    Title,
}

/// Text of `article` for tokenization: `field` if present, then content,
/// description and title in that order, else the empty string.
pub fn document_text(article: &Article, field: TextField) -> &str {
    let preferred = match field {
        TextField::Content => article.content.as_deref(),
        TextField::Description => article.description.as_deref(),
        TextField::Title => Some(article.title.as_str()),
    };
    preferred
        .or(article.content.as_deref())
        .or(article.description.as_deref())
        .unwrap_or(article.title.as_str())
}

pub struct Tokenizer {
    word: Regex,
    stop_words: HashSet<String>,
    stemmer: Option<Stemmer>,
}

impl Tokenizer {
    /// English tokenizer without stemming.
    pub fn english() -> Result<Self> {
        let mut stop_words: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
        stop_words.extend(HTML_STOP_WORDS.iter().map(|w| w.to_string()));

        Ok(Self {
            word: Regex::new(r"\w+")?,
            stop_words,
            stemmer: None,
        })
    }

    /// Enable or disable English (Porter2) stemming.
    pub fn with_stemming(mut self, enabled: bool) -> Self {
        self.stemmer = enabled.then(|| Stemmer::create(Algorithm::English));
        self
    }

    pub fn stems(&self) -> bool {
        self.stemmer.is_some()
    }

    /// True if every `_`-joined part of `token` is a stop word.
    pub fn is_stop_word(&self, token: &str) -> bool {
        token.split('_').all(|part| self.stop_words.contains(part))
    }

    /// Normalize raw text into tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.word
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|w| !w.chars().all(char::is_numeric))
            .filter(|w| !self.is_stop_word(w))
            .map(|w| match &self.stemmer {
                Some(stemmer) => stemmer.stem(w).into_owned(),
                None => w.to_string(),
            })
            .filter(|w| w.chars().count() > 1)
            .collect()
    }

    /// Run a seed phrase through the same pipeline as the documents, so its
    /// terms can be matched against document tokens.
    pub fn normalize_phrase(&self, phrase: &str) -> String {
        self.tokenize(phrase).join(" ")
    }

    pub fn tokenize_article(&self, article: &Article, field: TextField) -> Vec<String> {
        self.tokenize(document_text(article, field))
    }

    pub fn tokenize_articles(&self, articles: &[Article], field: TextField) -> Vec<Vec<String>> {
        articles
            .iter()
            .map(|a| self.tokenize_article(a, field))
            .collect()
    }
}
