//! Loose record conversion
//!
//! Feed data often arrives as untyped key/value records (form fields, rows
//! from a template engine, JSON objects). This module turns those into the
//! typed [`ChannelInfo`], [`ImageInfo`] and [`Item`] records at the call
//! boundary. Missing keys become empty strings and unknown keys are ignored,
//! so conversion never fails for a well-formed record.
//!
//! For channel records the feed's own URL may be given under either `about`
//! or `url`; `about` wins when both are present.

use std::collections::HashMap;

use crate::feed::{ChannelInfo, ImageInfo, Item};

fn get(record: &HashMap<String, String>, key: &str) -> String {
    record.get(key).cloned().unwrap_or_default()
}

/// Convert a loose channel record
///
/// # Example
///
/// ```
/// use rdf_feed::records::channel_from_map;
/// use std::collections::HashMap;
///
/// let record = HashMap::from([
///     ("url".to_string(), "http://x/feed.rdf".to_string()),
///     ("title".to_string(), "X".to_string()),
/// ]);
/// let channel = channel_from_map(&record);
/// assert_eq!(channel.about, "http://x/feed.rdf");
/// assert_eq!(channel.title, "X");
/// assert_eq!(channel.description, "");
/// ```
pub fn channel_from_map(record: &HashMap<String, String>) -> ChannelInfo {
    let about = record
        .get("about")
        .or_else(|| record.get("url"))
        .cloned()
        .unwrap_or_default();

    ChannelInfo {
        about,
        title: get(record, "title"),
        link: get(record, "link"),
        description: get(record, "description"),
    }
}

/// Convert a loose image record
pub fn image_from_map(record: &HashMap<String, String>) -> ImageInfo {
    ImageInfo {
        title: get(record, "title"),
        link: get(record, "link"),
        url: get(record, "url"),
    }
}

/// Convert a loose item record
pub fn item_from_map(record: &HashMap<String, String>) -> Item {
    Item {
        title: get(record, "title"),
        link: get(record, "link"),
        description: get(record, "description"),
    }
}

/// Convert a sequence of loose item records, keeping their order
pub fn items_from_maps<'a>(records: impl IntoIterator<Item = &'a HashMap<String, String>>) -> Vec<Item> {
    records.into_iter().map(item_from_map).collect()
}

/// Decode a JSON array of item objects
///
/// Each object may omit any field. Non-string field values and a top-level
/// value that is not an array are errors.
///
/// # Example
///
/// ```
/// use rdf_feed::records::items_from_json;
///
/// let items = items_from_json(r#"[
///     {"title": "A", "link": "http://x/a", "description": "da"},
///     {"title": "B", "link": "http://x/b"}
/// ]"#).unwrap();
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[1].description, "");
/// ```
#[cfg(feature = "serde")]
pub fn items_from_json(json: &str) -> crate::Result<Vec<Item>> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a JSON channel object
#[cfg(feature = "serde")]
pub fn channel_from_json(json: &str) -> crate::Result<ChannelInfo> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a JSON image object
#[cfg(feature = "serde")]
pub fn image_from_json(json: &str) -> crate::Result<ImageInfo> {
    Ok(serde_json::from_str(json)?)
}
