//! XML character escaping.
//!
//! Every piece of free text embedded in the feed goes through [`escape`].
//! The five reserved characters are replaced in a fixed order with `&` first,
//! so entities produced by the later replacements are never escaped again.
//!
//! ```ignore
//! assert_eq!(escape("Tom & Jerry"), "Tom &amp; Jerry");
//! assert_eq!(escape("plain"), "plain"); // borrowed, no allocation
//! ```

use serde_json::Value;
use std::borrow::Cow;

/// Characters reserved in XML text and attribute values.
const RESERVED: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escape reserved XML characters into their named entities.
///
/// Non-ASCII text and control characters pass through untouched.
pub fn escape(s: &str) -> Cow<'_, str> {
    // Fast path: nothing to replace
    if !s.contains(RESERVED) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

/// Escape an optional string; a missing value renders as empty text.
pub fn escape_opt(s: Option<&str>) -> Cow<'_, str> {
    s.map_or(Cow::Borrowed(""), escape)
}

/// Escape a dynamically typed value.
///
/// Only JSON strings carry text. Every other value (null, numbers, booleans,
/// arrays, objects) yields an empty string instead of an error.
pub fn escape_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => escape(s),
        _ => Cow::Borrowed(""),
    }
}
