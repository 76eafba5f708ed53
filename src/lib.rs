//! Podcast RSS - render podcast metadata into an RSS 2.0 feed.
//!
//! One pure entry point, [`render_feed`], turns a [`Podcast`] record, its
//! [`Episode`]s and [`FeedOptions`] into a complete XML document using the
//! iTunes, Podcast Index and Atom namespaces. [`escape`] is the XML escaper
//! applied to every piece of free text on the way in.
//!
//! ```ignore
//! use podcast_rss::{FeedOptions, render_feed};
//!
//! let options = FeedOptions::new("https://www.example.com");
//! let xml = render_feed(&podcast, Some(&episodes), &options)?;
//! ```
//!
//! Rendering has no I/O and no shared state. Calls are independent and may
//! run concurrently.

pub mod logger;

pub mod config;
pub mod feed;
pub mod model;
pub mod utils;

pub use config::{ConfigError, FeedOptions};
pub use feed::{FeedError, PodcastFeed, render_feed};
pub use logger::set_verbose;
pub use model::{Category, Episode, Locked, Podcast};
pub use utils::xml::{escape, escape_opt, escape_value};
