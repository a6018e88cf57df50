// Article records as returned by the news search API.
//
// Only the fields the ranker and reports need are modelled; anything else in
// the cached JSON is ignored. Nullable API fields stay `Option`.

use serde::{Deserialize, Deserializer, Serialize};

/// A single news article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    /// Raw timestamp, e.g. `2020-03-14T09:30:00Z`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub published_at: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// The publication an article came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

impl Article {
    /// Text used for ranking: content if present, otherwise the description.
    pub fn body(&self) -> Option<&str> {
        self.content.as_deref().or(self.description.as_deref())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
