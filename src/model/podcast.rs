//! Podcast (channel-level) metadata.

use super::non_empty;
use serde::{Deserialize, Serialize};

/// Language written when a podcast does not declare one.
pub const DEFAULT_LANGUAGE: &str = "en-us";

/// Podcast Index `<podcast:locked>` value.
///
/// `yes` tells hosting platforms not to import the feed elsewhere.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locked {
    Yes,
    #[default]
    No,
}

impl Locked {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

/// An iTunes category, optionally with one sub-category nested inside it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
}

impl Category {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            subtext: None,
        }
    }

    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    /// Sub-category text, ignoring an empty string.
    pub fn subtext(&self) -> Option<&str> {
        non_empty(self.subtext.as_ref())
    }
}

/// Channel-level podcast record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Podcast {
    /// Permanent feed identifier, written verbatim as `<podcast:guid>`.
    pub id: String,
    pub title: String,
    pub description: String,
    /// URL-safe slug under `{site_url}/podcasts/`.
    pub podcast_slug: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// ISO 8601 timestamp.
    pub created_at: String,
    /// ISO 8601 timestamp; preferred over `created_at` for build dates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Author or host, written as `<itunes:author>`.
    pub owner: String,
    #[serde(default)]
    pub explicit: bool,
    pub itunes_owner_name: String,
    pub itunes_owner_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<Locked>,
    #[serde(rename = "itunes_category", default)]
    pub categories: Vec<Category>,
}

impl Podcast {
    /// Declared language, or [`DEFAULT_LANGUAGE`].
    pub fn language(&self) -> &str {
        non_empty(self.language.as_ref()).unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn locked(&self) -> Locked {
        self.locked.unwrap_or_default()
    }

    /// Timestamp for `<lastBuildDate>` and channel `<pubDate>`.
    pub fn last_modified(&self) -> (&'static str, &str) {
        match non_empty(self.updated_at.as_ref()) {
            Some(updated) => ("updated_at", updated),
            None => ("created_at", self.created_at.as_str()),
        }
    }

    /// iTunes explicit flag as written in the feed.
    pub const fn explicit_str(&self) -> &'static str {
        if self.explicit { "true" } else { "false" }
    }
}
