//! Render configuration

/// How field values are embedded into the XML template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Escaping {
    /// Values are copied into the document verbatim.
    ///
    /// A value containing `<`, `&` or `"` produces malformed XML. This is the
    /// historical behavior of the format and remains the default.
    #[default]
    None,

    /// Values are escaped (`&lt;`, `&gt;`, `&amp;`, `&apos;`, `&quot;`) in
    /// both element text and attribute positions.
    Xml,
}

/// Options controlling how a [`FeedBuilder`](crate::FeedBuilder) renders
///
/// # Example
///
/// ```
/// use rdf_feed::{Escaping, RenderConfig};
///
/// // Byte-for-byte historical output (default)
/// let faithful = RenderConfig::faithful();
/// assert_eq!(faithful.escaping, Escaping::None);
///
/// // Well-formed output even for values with XML metacharacters
/// let escaped = RenderConfig::escaped();
/// assert_eq!(escaped.escaping, Escaping::Xml);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Escaping policy for field values
    #[cfg_attr(feature = "serde", serde(default))]
    pub escaping: Escaping,
}

impl RenderConfig {
    /// Values are embedded verbatim
    pub fn faithful() -> Self {
        Self {
            escaping: Escaping::None,
        }
    }

    /// Values are XML-escaped before embedding
    pub fn escaped() -> Self {
        Self {
            escaping: Escaping::Xml,
        }
    }
}
