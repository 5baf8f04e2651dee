//! Feed builder
//!
//! This module provides the FeedBuilder that accumulates channel, image and
//! item records and renders them into an RSS 1.0 document.

use std::fmt;
use std::io::Write;

use tracing::{debug, trace};

use super::render::Document;
use super::types::{ChannelInfo, ImageInfo, Item};
use crate::config::RenderConfig;
use crate::{Result, limits};

/// Accumulates feed records and renders them as RSS 1.0
///
/// Mutation comes in two flavors: `&mut self` setters (`set_channel`,
/// `add_item`, ...) for incremental use, and consuming chain methods
/// (`channel`, `item`, ...) for building in one expression.
///
/// # Example
///
/// ```
/// use rdf_feed::{ChannelInfo, FeedBuilder, Item};
///
/// let mut feed = FeedBuilder::new();
/// feed.set_channel(ChannelInfo::new(
///     "http://x/feed.rdf",
///     "X",
///     "http://x/",
///     "d",
/// ));
/// feed.add_items(vec![
///     Item::new("A", "http://x/a", "da"),
///     Item::new("B", "http://x/b", "db"),
/// ]);
///
/// let xml = feed.render();
/// assert!(xml.starts_with("<?xml version=\"1.0\"?>"));
/// assert!(xml.contains("<rdf:li resource=\"http://x/a\"/><rdf:li resource=\"http://x/b\"/>"));
/// assert!(xml.ends_with("</rdf:RDF>"));
/// ```
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedBuilder {
    channel: Option<ChannelInfo>,
    image: Option<ImageInfo>,
    items: Vec<Item>,
    config: RenderConfig,
}

impl FeedBuilder {
    /// Create an empty builder that renders values verbatim
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given render options
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Append items, keeping their relative order
    pub fn add_items(&mut self, items: impl IntoIterator<Item = Item>) {
        let before = self.items.len();
        for item in items {
            self.add_item(item);
        }
        debug!(
            "Added {} items ({} total)",
            self.items.len() - before,
            self.items.len()
        );
    }

    /// Append a single item to the end of the sequence
    pub fn add_item(&mut self, item: Item) {
        limits::note("item title", &item.title, limits::ITEM_TITLE);
        limits::note("item link", &item.link, limits::ITEM_LINK);
        limits::note(
            "item description",
            &item.description,
            limits::ITEM_DESCRIPTION,
        );
        trace!("Adding item {}", item.link);
        self.items.push(item);
    }

    /// Set the channel metadata, replacing any previous value
    pub fn set_channel(&mut self, channel: ChannelInfo) {
        limits::note("channel title", &channel.title, limits::CHANNEL_TITLE);
        limits::note("channel link", &channel.link, limits::CHANNEL_LINK);
        limits::note(
            "channel description",
            &channel.description,
            limits::CHANNEL_DESCRIPTION,
        );
        if self.channel.is_some() {
            debug!("Replacing channel metadata with {}", channel.about);
        }
        self.channel = Some(channel);
    }

    /// Set the channel image, replacing any previous value
    pub fn set_image(&mut self, image: ImageInfo) {
        limits::note("image title", &image.title, limits::IMAGE_TITLE);
        limits::note("image link", &image.link, limits::IMAGE_LINK);
        limits::note("image url", &image.url, limits::IMAGE_URL);
        if self.image.is_some() {
            debug!("Replacing channel image with {}", image.url);
        }
        self.image = Some(image);
    }

    /// Remove the channel image, if any
    pub fn clear_image(&mut self) -> Option<ImageInfo> {
        self.image.take()
    }

    /// Set the channel metadata (chaining form of [`set_channel`](Self::set_channel))
    pub fn channel(mut self, channel: ChannelInfo) -> Self {
        self.set_channel(channel);
        self
    }

    /// Set the channel image (chaining form of [`set_image`](Self::set_image))
    pub fn image(mut self, image: ImageInfo) -> Self {
        self.set_image(image);
        self
    }

    /// Append one item (chaining form of [`add_item`](Self::add_item))
    pub fn item(mut self, item: Item) -> Self {
        self.add_item(item);
        self
    }

    /// Append items (chaining form of [`add_items`](Self::add_items))
    pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.add_items(items);
        self
    }

    /// Channel metadata, if set
    pub fn channel_info(&self) -> Option<&ChannelInfo> {
        self.channel.as_ref()
    }

    /// Channel image, if set
    pub fn image_info(&self) -> Option<&ImageInfo> {
        self.image.as_ref()
    }

    /// Items in insertion order
    pub fn item_list(&self) -> &[Item] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if no items have been added
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render options in effect
    pub fn config(&self) -> RenderConfig {
        self.config
    }

    /// Render the complete RSS 1.0 document
    ///
    /// Output depends only on the builder's current state: two calls with no
    /// mutation in between return identical strings. An unset channel renders
    /// with empty fields.
    pub fn render(&self) -> String {
        let doc = Document {
            channel: self.channel.as_ref(),
            image: self.image.as_ref(),
            items: &self.items,
            config: self.config,
        };
        let xml = doc.render();
        debug!(
            "Rendered RSS 1.0 document: {} items, {} bytes",
            self.items.len(),
            xml.len()
        );
        xml
    }

    /// Render the document and write it to `writer`
    ///
    /// The whole document is rendered before the first byte is written.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let xml = self.render();
        writer.write_all(xml.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for FeedBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Extend<Item> for FeedBuilder {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        self.add_items(iter);
    }
}
