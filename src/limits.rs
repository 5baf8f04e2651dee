//! Advisory field lengths from RSS 0.91
//!
//! RSS 1.0 itself imposes no length limits, but feeds that should stay
//! readable by RSS 0.91 consumers are expected to keep fields within these
//! sizes. The builder never truncates or rejects anything; an oversized value
//! only produces a `debug` event.

use tracing::debug;

/// Channel title
pub const CHANNEL_TITLE: usize = 40;
/// Channel link
pub const CHANNEL_LINK: usize = 500;
/// Channel description
pub const CHANNEL_DESCRIPTION: usize = 500;

/// Image title
pub const IMAGE_TITLE: usize = 100;
/// Image link
pub const IMAGE_LINK: usize = 500;
/// Image URL
pub const IMAGE_URL: usize = 500;

/// Item title
pub const ITEM_TITLE: usize = 100;
/// Item link
pub const ITEM_LINK: usize = 500;
/// Item description
pub const ITEM_DESCRIPTION: usize = 500;

/// Returns true if `value` is longer than `limit` characters
pub fn exceeds(value: &str, limit: usize) -> bool {
    value.chars().count() > limit
}

/// Emit a debug event when `value` is over its advisory limit
pub(crate) fn note(field: &'static str, value: &str, limit: usize) {
    if exceeds(value, limit) {
        debug!(
            "{} is {} chars, over the RSS 0.91 advisory limit of {}",
            field,
            value.chars().count(),
            limit
        );
    }
}
