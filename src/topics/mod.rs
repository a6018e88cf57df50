// Topic discovery: swappable topic model and the TF-IDF default.

pub mod tfidf;
pub mod topic;
pub mod traits;
