//! RSS 1.0 feed construction
//!
//! Reference: https://web.resource.org/rss/1.0/spec
//!
//! This module is organized into:
//! - `types`: typed records (ChannelInfo, ImageInfo, Item)
//! - `builder`: FeedBuilder, which accumulates records and renders them
//! - `render`: the fixed RSS 1.0 document layout

mod builder;
mod render;
mod types;

pub use self::builder::FeedBuilder;
pub use self::render::{RDF_NAMESPACE, RSS_NAMESPACE};
pub use self::types::{ChannelInfo, ImageInfo, Item};
