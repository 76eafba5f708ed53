//! One `<item>` block per episode.

use super::{FeedError, PodcastFeed, http_date, push_element};
use crate::{
    model::Episode,
    utils::{mime::enclosure_type, xml::escape},
};

/// Write the `<item>` for `episode`, preceded by a blank line unless minified.
///
/// Author and explicit flag come from the podcast; episodes do not carry
/// their own.
pub(super) fn write_item(
    xml: &mut String,
    feed: &PodcastFeed<'_>,
    index: usize,
    episode: &Episode,
) -> Result<(), FeedError> {
    let podcast = feed.podcast;
    let pub_date = http_date(
        format!("episodes[{index}].publication_date"),
        &episode.publication_date,
    )?;

    let layout = feed.layout();
    let nl = layout.newline();
    let indent = layout.indent(3);

    xml.push_str(nl);
    xml.push_str(layout.indent(2));
    xml.push_str("<item>");
    xml.push_str(nl);

    push_element(xml, layout, 3, "title", &escape(&episode.title));

    xml.push_str(indent);
    xml.push_str("<guid isPermaLink=\"false\">");
    xml.push_str(&episode.guid);
    xml.push_str("</guid>");
    xml.push_str(nl);

    push_element(xml, layout, 3, "link", &feed.episode_url(&episode.episode_slug));
    push_element(xml, layout, 3, "description", &escape(&episode.description));
    push_element(xml, layout, 3, "pubDate", &pub_date);

    xml.push_str(indent);
    xml.push_str("<enclosure url=\"");
    xml.push_str(&escape(&episode.audio_url));
    xml.push_str("\" length=\"");
    xml.push_str(&episode.audio_length.to_string());
    xml.push_str("\" type=\"");
    xml.push_str(enclosure_type(&episode.audio_url));
    xml.push_str("\"/>");
    xml.push_str(nl);

    push_element(xml, layout, 3, "itunes:author", &escape(&podcast.owner));
    push_element(xml, layout, 3, "itunes:explicit", podcast.explicit_str());

    xml.push_str(indent);
    xml.push_str("<itunes:image href=\"");
    xml.push_str(&escape(episode.image_url_or(&podcast.image_url)));
    xml.push_str("\"/>");
    xml.push_str(nl);

    xml.push_str(layout.indent(2));
    xml.push_str("</item>");
    xml.push_str(nl);
    Ok(())
}
