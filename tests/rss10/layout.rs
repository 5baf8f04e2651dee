//! RSS 1.0 Document Layout Tests
//!
//! Tests for the structure of rendered documents: which sections appear,
//! in which order, and how they track the builder's state.

use rdf_feed::{ChannelInfo, FeedBuilder, ImageInfo, Item};

fn example_channel() -> ChannelInfo {
    ChannelInfo::new("http://x/feed.rdf", "X", "http://x/", "d")
}

fn example_items() -> Vec<Item> {
    vec![
        Item::new("A", "http://x/a", "da"),
        Item::new("B", "http://x/b", "db"),
    ]
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in:\n{haystack}"))
}

#[test]
fn test_header_and_footer() {
    let xml = FeedBuilder::new().render();
    assert!(xml.starts_with(
        "<?xml version=\"1.0\"?>\n<rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\" xmlns=\"http://purl.org/rss/1.0/\">\n"
    ));
    assert!(xml.ends_with("</rdf:RDF>"));
    assert_eq!(xml.matches("<rdf:RDF").count(), 1);
}

#[test]
fn test_render_is_deterministic() {
    let mut feed = FeedBuilder::new();
    feed.set_channel(example_channel());
    feed.set_image(ImageInfo::new("Logo", "http://x/", "http://x/logo.png"));
    feed.add_items(example_items());

    let first = feed.render();
    let second = feed.render();
    assert_eq!(first, second);
}

#[test]
fn test_example_document_order() {
    let mut feed = FeedBuilder::new();
    feed.set_channel(example_channel());
    feed.add_items(example_items());
    let xml = feed.render();

    let channel = position(&xml, "<channel rdf:about=\"http://x/feed.rdf\">");
    let seq_a = position(&xml, "<rdf:li resource=\"http://x/a\"/>");
    let seq_b = position(&xml, "<rdf:li resource=\"http://x/b\"/>");
    let channel_end = position(&xml, "</channel>");
    let item_a = position(&xml, "<item rdf:about=\"http://x/a\">");
    let item_b = position(&xml, "<item rdf:about=\"http://x/b\">");

    assert!(channel < seq_a);
    assert!(seq_a < seq_b);
    assert!(seq_b < channel_end);
    assert!(channel_end < item_a);
    assert!(item_a < item_b);

    assert!(xml.contains(
        "<item rdf:about=\"http://x/a\">\n<title>A</title>\n<link>http://x/a</link>\n<description>da</description>\n</item>"
    ));
}

#[test]
fn test_seq_and_item_blocks_match() {
    let mut feed = FeedBuilder::new().channel(example_channel());
    for i in 0..25 {
        feed.add_item(Item::new(
            format!("Item {i}"),
            format!("http://x/{i}"),
            "",
        ));
    }
    let xml = feed.render();

    let seq: Vec<&str> = xml
        .match_indices("<rdf:li resource=\"")
        .map(|(i, m)| {
            let rest = &xml[i + m.len()..];
            &rest[..rest.find('"').unwrap()]
        })
        .collect();
    let blocks: Vec<&str> = xml
        .match_indices("<item rdf:about=\"")
        .map(|(i, m)| {
            let rest = &xml[i + m.len()..];
            &rest[..rest.find('"').unwrap()]
        })
        .collect();

    assert_eq!(seq.len(), 25);
    assert_eq!(seq, blocks);
    let expected: Vec<String> = (0..25).map(|i| format!("http://x/{i}")).collect();
    assert_eq!(seq, expected);
}

#[test]
fn test_no_image_no_image_elements() {
    let feed = FeedBuilder::new()
        .channel(example_channel())
        .items(example_items());
    let xml = feed.render();

    assert!(!xml.contains("<image rdf:resource="));
    assert!(!xml.contains("<image rdf:about="));
    assert!(!xml.contains("<image"));
}

#[test]
fn test_image_reference_and_block() {
    let feed = FeedBuilder::new()
        .channel(example_channel())
        .image(ImageInfo::new("Logo", "http://x/", "http://x/logo.png"));
    let xml = feed.render();

    let reference = position(&xml, "<image rdf:resource=\"http://x/logo.png\"/>");
    let channel_end = position(&xml, "</channel>");
    let block = position(
        &xml,
        "<image rdf:about=\"http://x/logo.png\">\n<title>Logo</title>\n<link>http://x/</link>\n<url>http://x/logo.png</url>\n</image>",
    );
    assert!(reference < channel_end);
    assert!(channel_end < block);
}

#[test]
fn test_image_block_precedes_items() {
    let feed = FeedBuilder::new()
        .channel(example_channel())
        .image(ImageInfo::new("Logo", "http://x/", "http://x/logo.png"))
        .items(example_items());
    let xml = feed.render();

    assert!(position(&xml, "</image>") < position(&xml, "<item rdf:about="));
}

#[test]
fn test_empty_items_no_items_block() {
    let xml = FeedBuilder::new().channel(example_channel()).render();
    assert!(!xml.contains("<items>"));
    assert!(!xml.contains("<rdf:Seq>"));
    assert!(!xml.contains("<item "));
    assert!(xml.contains("<description>d</description></channel>\n"));
}

#[test]
fn test_unset_channel_renders_empty_fields() {
    let xml = FeedBuilder::new().items(example_items()).render();
    assert!(xml.contains(
        "<channel rdf:about=\"\">\n<title></title>\n<link></link>\n<description></description>"
    ));
}

#[test]
fn test_add_item_after_render() {
    let mut feed = FeedBuilder::new()
        .channel(example_channel())
        .items(example_items());
    let before = feed.render();
    assert!(!before.contains("http://x/c"));

    feed.add_item(Item::new("C", "http://x/c", "dc"));
    let after = feed.render();

    assert_ne!(before, after);
    assert!(
        position(&after, "<rdf:li resource=\"http://x/b\"/>")
            < position(&after, "<rdf:li resource=\"http://x/c\"/>")
    );
    assert!(
        position(&after, "<item rdf:about=\"http://x/b\">")
            < position(&after, "<item rdf:about=\"http://x/c\">")
    );
    assert!(after.ends_with("</item></rdf:RDF>"));
}

#[test]
fn test_replaced_channel_only_latest_rendered() {
    let mut feed = FeedBuilder::new().channel(example_channel());
    feed.set_channel(ChannelInfo::new("http://y/feed.rdf", "Y", "http://y/", "e"));
    let xml = feed.render();

    assert!(xml.contains("<channel rdf:about=\"http://y/feed.rdf\">"));
    assert!(!xml.contains("http://x/feed.rdf"));
    assert_eq!(xml.matches("<channel").count(), 1);
}

#[test]
fn test_duplicate_links_kept() {
    let feed = FeedBuilder::new()
        .item(Item::new("A", "http://x/same", ""))
        .item(Item::new("B", "http://x/same", ""));
    let xml = feed.render();

    assert_eq!(xml.matches("<rdf:li resource=\"http://x/same\"/>").count(), 2);
    assert_eq!(xml.matches("<item rdf:about=\"http://x/same\">").count(), 2);
}
