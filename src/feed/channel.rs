//! `<rss>` root and `<channel>` header block.

use super::{ATOM_NS, FeedError, ITUNES_NS, PODCAST_NS, PodcastFeed, http_date, push_element};
use crate::{
    model::Category,
    utils::{mime, xml::escape},
};

/// Write the prolog, the `<rss>` root and every channel-level element.
///
/// Leaves `<channel>` open for the items.
pub(super) fn write_channel_open(xml: &mut String, feed: &PodcastFeed<'_>) -> Result<(), FeedError> {
    let podcast = feed.podcast;
    let layout = feed.layout();
    let nl = layout.newline();
    let indent = layout.indent(2);
    let (date_field, date_value) = podcast.last_modified();
    let last_build_date = http_date(date_field, date_value)?;

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
    xml.push_str(nl);
    xml.push_str("<rss xmlns:itunes=\"");
    xml.push_str(ITUNES_NS);
    xml.push_str("\" xmlns:podcast=\"");
    xml.push_str(PODCAST_NS);
    xml.push_str("\" xmlns:atom=\"");
    xml.push_str(ATOM_NS);
    xml.push_str("\" version=\"2.0\">");
    xml.push_str(nl);
    xml.push_str(layout.indent(1));
    xml.push_str("<channel>");
    xml.push_str(nl);

    push_element(xml, layout, 2, "title", &escape(&podcast.title));
    push_element(xml, layout, 2, "link", feed.base_url());
    push_element(xml, layout, 2, "description", &escape(&podcast.description));
    push_element(xml, layout, 2, "language", podcast.language());
    push_element(xml, layout, 2, "lastBuildDate", &last_build_date);
    push_element(xml, layout, 2, "pubDate", &last_build_date);

    xml.push_str(indent);
    xml.push_str("<itunes:image href=\"");
    xml.push_str(&escape(&podcast.image_url));
    xml.push_str("\"/>");
    xml.push_str(nl);

    push_element(xml, layout, 2, "itunes:author", &escape(&podcast.owner));
    push_element(xml, layout, 2, "itunes:explicit", podcast.explicit_str());

    xml.push_str(indent);
    xml.push_str("<itunes:owner>");
    xml.push_str(nl);
    push_element(xml, layout, 3, "itunes:name", &escape(&podcast.itunes_owner_name));
    push_element(xml, layout, 3, "itunes:email", &escape(&podcast.itunes_owner_email));
    xml.push_str(indent);
    xml.push_str("</itunes:owner>");
    xml.push_str(nl);

    // Written even with no categories, leaving a whitespace-only line
    xml.push_str(indent);
    let separator = format!("{nl}{indent}");
    let categories: Vec<String> = podcast.categories.iter().map(category_xml).collect();
    xml.push_str(&categories.join(&separator));
    xml.push_str(nl);

    xml.push_str(indent);
    xml.push_str("<atom:link href=\"");
    xml.push_str(&feed.feed_url());
    xml.push_str("\" rel=\"self\" type=\"");
    xml.push_str(mime::types::RSS);
    xml.push_str("\"/>");
    xml.push_str(nl);

    push_element(xml, layout, 2, "podcast:locked", podcast.locked().as_str());
    push_element(xml, layout, 2, "podcast:guid", &podcast.id);

    Ok(())
}

/// Close `<channel>` and `<rss>`. No trailing newline.
pub(super) fn write_channel_close(xml: &mut String, feed: &PodcastFeed<'_>) {
    let layout = feed.layout();
    xml.push_str(layout.newline());
    xml.push_str(layout.indent(1));
    xml.push_str("</channel>");
    xml.push_str(layout.newline());
    xml.push_str("</rss>");
}

/// `<itunes:category>`, nesting the sub-category when one is set.
fn category_xml(category: &Category) -> String {
    match category.subtext() {
        Some(subtext) => format!(
            "<itunes:category text=\"{}\"><itunes:category text=\"{}\"/></itunes:category>",
            escape(&category.text),
            escape(subtext)
        ),
        None => format!("<itunes:category text=\"{}\"/>", escape(&category.text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::FeedOptions,
        model::{Locked, Podcast},
    };

    fn make_podcast() -> Podcast {
        Podcast {
            id: "feed-id".to_string(),
            title: "Show".to_string(),
            description: "About things".to_string(),
            podcast_slug: "show".to_string(),
            image_url: "https://example.com/cover.png".to_string(),
            created_at: "2025-06-17T14:30:00.000Z".to_string(),
            owner: "Host".to_string(),
            itunes_owner_name: "Host".to_string(),
            itunes_owner_email: "host@example.com".to_string(),
            ..Podcast::default()
        }
    }

    fn render_channel(podcast: &Podcast) -> Result<String, FeedError> {
        let options = FeedOptions::new("https://example.com");
        let feed = PodcastFeed::new(podcast, None, &options);
        let mut xml = String::new();
        write_channel_open(&mut xml, &feed)?;
        Ok(xml)
    }

    #[test]
    fn test_category_plain() {
        assert_eq!(
            category_xml(&Category::new("Technology")),
            r#"<itunes:category text="Technology"/>"#
        );
    }

    #[test]
    fn test_category_nested() {
        assert_eq!(
            category_xml(&Category::new("Society & Culture").with_subtext("Documentary")),
            r#"<itunes:category text="Society &amp; Culture"><itunes:category text="Documentary"/></itunes:category>"#
        );
    }

    #[test]
    fn test_categories_joined_on_separate_lines() {
        let mut podcast = make_podcast();
        podcast.categories = vec![
            Category::new("Technology"),
            Category::new("Arts").with_subtext("Design"),
        ];
        let xml = render_channel(&podcast).unwrap();
        assert!(xml.contains(concat!(
            "    <itunes:category text=\"Technology\"/>\n",
            "    <itunes:category text=\"Arts\"><itunes:category text=\"Design\"/></itunes:category>\n",
            "    <atom:link"
        )));
    }

    #[test]
    fn test_channel_defaults() {
        let xml = render_channel(&make_podcast()).unwrap();
        assert!(xml.contains("<language>en-us</language>"));
        assert!(xml.contains("<podcast:locked>no</podcast:locked>"));
        assert!(xml.contains("<itunes:explicit>false</itunes:explicit>"));
        assert!(xml.contains("<podcast:guid>feed-id</podcast:guid>"));
        assert!(xml.ends_with("</podcast:guid>\n"));
    }

    #[test]
    fn test_channel_overrides() {
        let mut podcast = make_podcast();
        podcast.language = Some("fr-fr".to_string());
        podcast.locked = Some(Locked::Yes);
        podcast.explicit = true;
        let xml = render_channel(&podcast).unwrap();
        assert!(xml.contains("<language>fr-fr</language>"));
        assert!(xml.contains("<podcast:locked>yes</podcast:locked>"));
        assert!(xml.contains("<itunes:explicit>true</itunes:explicit>"));
    }

    #[test]
    fn test_channel_links() {
        let xml = render_channel(&make_podcast()).unwrap();
        assert!(xml.contains("<link>https://example.com/podcasts/show</link>"));
        assert!(xml.contains(
            r#"<atom:link href="https://example.com/podcasts/show/rss.xml" rel="self" type="application/rss+xml"/>"#
        ));
    }

    #[test]
    fn test_updated_at_preferred_for_dates() {
        let mut podcast = make_podcast();
        podcast.updated_at = Some("2025-07-01T08:00:00Z".to_string());
        let xml = render_channel(&podcast).unwrap();
        assert!(xml.contains("<lastBuildDate>Tue, 01 Jul 2025 08:00:00 GMT</lastBuildDate>"));
        assert!(xml.contains("<pubDate>Tue, 01 Jul 2025 08:00:00 GMT</pubDate>"));
    }

    #[test]
    fn test_invalid_created_at() {
        let mut podcast = make_podcast();
        podcast.created_at = "yesterday".to_string();
        assert_eq!(
            render_channel(&podcast),
            Err(FeedError::InvalidDate {
                field: "created_at".to_string(),
                value: "yesterday".to_string(),
            })
        );
    }

    #[test]
    fn test_owner_block_escaped() {
        let mut podcast = make_podcast();
        podcast.itunes_owner_name = "Ben & Jerry".to_string();
        podcast.owner = "<Host>".to_string();
        let xml = render_channel(&podcast).unwrap();
        assert!(xml.contains(concat!(
            "    <itunes:owner>\n",
            "      <itunes:name>Ben &amp; Jerry</itunes:name>\n",
            "      <itunes:email>host@example.com</itunes:email>\n",
            "    </itunes:owner>\n"
        )));
        assert!(xml.contains("<itunes:author>&lt;Host&gt;</itunes:author>"));
    }
}
