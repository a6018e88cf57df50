// Text normalization: the tokenizer handle and multi-word phrase detection.

pub mod phrases;
pub mod tokenizer;

pub use tokenizer::{document_text, TextField, Tokenizer};
