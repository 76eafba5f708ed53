//! Podcast feed rendering.
//!
//! Turns a [`Podcast`], its [`Episode`]s and [`FeedOptions`] into one RSS 2.0
//! document carrying the iTunes, Podcast Index and Atom namespaces:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <rss xmlns:itunes="..." xmlns:podcast="..." xmlns:atom="..." version="2.0">
//!   <channel>
//!     <title>...</title>
//!     ...
//!     <podcast:guid>...</podcast:guid>
//!
//!     <item>
//!       ...
//!     </item>
//!
//!   </channel>
//! </rss>
//! ```
//!
//! Element order inside `<channel>` and `<item>` is fixed. Consumers and
//! golden-file tests rely on it.

mod channel;
mod item;

use crate::{
    config::FeedOptions,
    debug,
    model::{Episode, Podcast},
    utils::date::DateTimeUtc,
};
use thiserror::Error;

pub const ITUNES_NS: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
pub const PODCAST_NS: &str = "https://podcastindex.org/namespace/1.0";
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Errors surfaced while rendering. Well-formed input never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("invalid date in `{field}`: {value:?}")]
    InvalidDate { field: String, value: String },
}

/// Render a complete podcast feed.
///
/// `episodes` may be `None`, which renders the same as an empty slice: a
/// channel with no `<item>` elements. Items keep the given order.
pub fn render_feed(
    podcast: &Podcast,
    episodes: Option<&[Episode]>,
    options: &FeedOptions,
) -> Result<String, FeedError> {
    PodcastFeed::new(podcast, episodes, options).into_xml()
}

/// Borrowed render inputs plus the links derived from them.
pub struct PodcastFeed<'a> {
    podcast: &'a Podcast,
    episodes: &'a [Episode],
    options: &'a FeedOptions,
    base_url: String,
}

impl<'a> PodcastFeed<'a> {
    pub fn new(
        podcast: &'a Podcast,
        episodes: Option<&'a [Episode]>,
        options: &'a FeedOptions,
    ) -> Self {
        let base_url = format!("{}/podcasts/{}", options.site_url, podcast.podcast_slug);
        Self {
            podcast,
            episodes: episodes.unwrap_or_default(),
            options,
            base_url,
        }
    }

    /// Canonical podcast page: `{site_url}/podcasts/{podcast_slug}`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Self link of the feed document.
    pub fn feed_url(&self) -> String {
        format!("{}/rss.xml", self.base_url)
    }

    /// Canonical episode page.
    pub fn episode_url(&self, episode_slug: &str) -> String {
        format!("{}/episodes/{}", self.base_url, episode_slug)
    }

    pub fn into_xml(self) -> Result<String, FeedError> {
        let mut xml = String::with_capacity(2048 + self.episodes.len() * 1024);

        channel::write_channel_open(&mut xml, &self)?;
        for (index, episode) in self.episodes.iter().enumerate() {
            item::write_item(&mut xml, &self, index, episode)?;
        }
        channel::write_channel_close(&mut xml, &self);

        debug!("feed"; "{} items -> {}", self.episodes.len(), self.feed_url());

        Ok(xml)
    }

    fn layout(&self) -> Layout {
        Layout {
            minify: self.options.minify,
        }
    }
}

/// Whitespace between tags. Text content is never touched.
#[derive(Debug, Clone, Copy)]
struct Layout {
    minify: bool,
}

impl Layout {
    const PADDING: &'static str = "        ";

    /// Two spaces per nesting level, nothing when minified.
    fn indent(self, depth: usize) -> &'static str {
        if self.minify {
            ""
        } else {
            &Self::PADDING[..depth * 2]
        }
    }

    fn newline(self) -> &'static str {
        if self.minify { "" } else { "\n" }
    }
}

/// Parse a record timestamp and format it as an HTTP-date.
fn http_date(field: impl Into<String>, value: &str) -> Result<String, FeedError> {
    DateTimeUtc::parse(value)
        .map(DateTimeUtc::to_http_date)
        .ok_or_else(|| FeedError::InvalidDate {
            field: field.into(),
            value: value.to_string(),
        })
}

/// Write `<tag>text</tag>` on its own line; `text` must already be escaped.
fn push_element(xml: &mut String, layout: Layout, depth: usize, tag: &str, text: &str) {
    xml.push_str(layout.indent(depth));
    xml.push('<');
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(text);
    xml.push_str("</");
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(layout.newline());
}
