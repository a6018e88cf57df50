// Newsprobe: keyword expansion and relevance ranking for news corpora
//
// This is the library root. Each module corresponds to a stage of the
// analysis: loading articles, tokenizing them, scoring term association,
// and ranking articles against query terms.

pub mod articles;
pub mod config;
pub mod error;
pub mod expansion;
pub mod output;
pub mod pipeline;
pub mod ranking;
pub mod text;
pub mod topics;
