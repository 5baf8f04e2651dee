#![doc = include_str!("../README.md")]

mod config;
mod error;
/// RSS 1.0 feed records, builder and renderer
pub mod feed;
/// Advisory RSS 0.91 field lengths
pub mod limits;
/// Conversion of loose key/value records into typed feed records
pub mod records;

pub use config::{Escaping, RenderConfig};
pub use error::{FeedError, Result};
pub use feed::{ChannelInfo, FeedBuilder, ImageInfo, Item, RDF_NAMESPACE, RSS_NAMESPACE};
