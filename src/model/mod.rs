//! Input records for feed rendering.
//!
//! Plain owned structs with serde derives, so callers can deserialize them
//! straight from JSON rows or API payloads using the same field names.

mod episode;
mod podcast;

pub use episode::Episode;
pub use podcast::{Category, Locked, Podcast};

/// Treat a present-but-empty string the same as a missing one.
pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}
