//! Typed feed records
//!
//! Every field is a plain string. Nothing is validated: an empty field
//! renders as an empty element or attribute.

/// Channel metadata describing the feed as a whole
///
/// # Examples
///
/// ```
/// use rdf_feed::ChannelInfo;
///
/// let channel = ChannelInfo::new(
///     "http://example.com/feed.rdf",
///     "Example",
///     "http://example.com/",
///     "News from example.com",
/// );
/// assert_eq!(channel.about, "http://example.com/feed.rdf");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChannelInfo {
    /// URL where the feed document itself is published (`rdf:about`)
    ///
    /// Loose records may spell this key `url`.
    #[cfg_attr(feature = "serde", serde(alias = "url"))]
    pub about: String,
    /// Channel title (RSS 0.91 advisory limit: 40 chars)
    pub title: String,
    /// Link to the site or section this feed serves
    pub link: String,
    /// Short description of the channel
    pub description: String,
}

impl ChannelInfo {
    /// Create channel metadata
    pub fn new(
        about: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            about: about.into(),
            title: title.into(),
            link: link.into(),
            description: description.into(),
        }
    }
}

/// Image associated with the channel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImageInfo {
    /// Alt text for the image
    pub title: String,
    /// URL the image should link to
    pub link: String,
    /// Location of the image file; also its RDF identifier
    pub url: String,
}

impl ImageInfo {
    /// Create an image record
    pub fn new(title: impl Into<String>, link: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            url: url.into(),
        }
    }
}

/// A single feed entry
///
/// The `link` doubles as the item's RDF identifier, both in the channel's
/// `rdf:Seq` and in the item's own `rdf:about`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Item {
    pub title: String,
    pub link: String,
    pub description: String,
}

impl Item {
    /// Create an item
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            description: description.into(),
        }
    }
}
