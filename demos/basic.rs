//! Basic RSS 1.0 feed example
//!
//! Run with: cargo run --example basic

use rdf_feed::records::{channel_from_map, items_from_maps};
use rdf_feed::{FeedBuilder, ImageInfo, RenderConfig};
use std::collections::HashMap;

fn record(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (RUST_LOG=rdf_feed=debug to see builder events)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Loose records, as they might come out of a database row or a form
    let channel = record(&[
        ("url", "http://example.com/feed.rdf"),
        ("title", "Example News"),
        ("link", "http://example.com/"),
        ("description", "Headlines from example.com"),
    ]);
    let rows = vec![
        record(&[
            ("title", "First post"),
            ("link", "http://example.com/news/1"),
            ("description", "Hello, world"),
        ]),
        record(&[("title", "Second post"), ("link", "http://example.com/news/2")]),
    ];

    let escape = std::env::args().any(|arg| arg == "--escape");
    let config = if escape {
        RenderConfig::escaped()
    } else {
        RenderConfig::faithful()
    };

    let mut feed = FeedBuilder::with_config(config);
    feed.set_channel(channel_from_map(&channel));
    feed.set_image(ImageInfo::new(
        "Example News",
        "http://example.com/",
        "http://example.com/logo.png",
    ));
    feed.add_items(items_from_maps(&rows));

    feed.write_to(std::io::stdout().lock())?;
    println!();

    Ok(())
}
