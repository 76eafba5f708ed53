//! MIME types used in the feed.

/// Common MIME type constants.
pub mod types {
    // Web feeds
    pub const RSS: &str = "application/rss+xml";

    // Audio
    pub const MP3: &str = "audio/mpeg";
    pub const MP4_AUDIO: &str = "audio/mp4";
}

/// Pick the enclosure MIME type for an episode's audio URL.
///
/// A plain substring test: query strings and fragments do not hide the
/// container, and any URL mentioning `.mp4` or `.m4a` is treated as MPEG-4.
pub fn enclosure_type(audio_url: &str) -> &'static str {
    if audio_url.contains(".mp4") || audio_url.contains(".m4a") {
        types::MP4_AUDIO
    } else {
        types::MP3
    }
}
