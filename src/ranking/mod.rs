// Relevance ranking: seed-term rules, pluralization, and the article filter.

pub mod filter;
pub mod plural;
pub mod terms;
