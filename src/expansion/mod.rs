// Keyword expansion: count matrices, JLH association scores, and the
// expander that turns seed terms into related vocabulary.

pub mod expander;
pub mod jlh;
pub mod matrix;
