//! Episode (item-level) metadata.

use super::non_empty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Episode {
    /// Permanent identifier, written verbatim with `isPermaLink="false"`.
    pub guid: String,
    pub title: String,
    pub description: String,
    /// ISO 8601 timestamp.
    pub publication_date: String,
    /// URL-safe slug under `{podcast}/episodes/`.
    pub episode_slug: String,
    pub audio_url: String,
    /// Enclosure size in bytes.
    pub audio_length: u64,
    /// Overrides the podcast artwork for this episode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Episode {
    /// Episode artwork, or `fallback` (the podcast's) when unset.
    pub fn image_url_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_empty(self.image_url.as_ref()).unwrap_or(fallback)
    }
}
