// Article corpus: record model, query profiles, and the on-disk JSON cache.

pub mod models;
pub mod profile;
pub mod store;

pub use models::{Article, Source};
