//! Routing decisions for incoming path segments.

use serde::Serialize;

use crate::core::ContentId;

/// What an incoming path segment means to the routing layer.
///
/// Mirrors the three-way branch the site router takes: fetch by resolved
/// identifier, fetch by raw identifier, or render the not-found page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RouteDecision {
    /// The segment is a registered slug.
    Content {
        /// The slug as it appeared in the path.
        slug: String,
        /// The identifier it resolves to.
        id: ContentId,
    },

    /// Not registered, but shaped like a content identifier.
    /// Pass it straight to the CMS; it may be unpublished or renamed.
    RawIdentifier {
        /// The identifier-shaped segment.
        id: ContentId,
    },

    /// Neither a known slug nor identifier-shaped.
    NotFound {
        /// The offending segment (for the 404 page / diagnostics).
        segment: String,
    },
}

impl RouteDecision {
    /// Check if the segment resolved to fetchable content.
    pub const fn is_fetchable(&self) -> bool {
        matches!(self, Self::Content { .. } | Self::RawIdentifier { .. })
    }

    /// Get the identifier to fetch, if any.
    pub const fn id(&self) -> Option<&ContentId> {
        match self {
            Self::Content { id, .. } | Self::RawIdentifier { id } => Some(id),
            Self::NotFound { .. } => None,
        }
    }
}
