//! Syntactic classification of incoming paths against the catalog prefix.

/// Syntactic classification of a decoded route path
///
/// This is shape-only: whether the final segment is a known slug or a raw
/// identifier is a semantic question answered by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind<'a> {
    /// Exactly the catalog prefix (the listing page).
    Index,
    /// Catalog prefix plus one trailing segment (detail page candidate).
    Detail(&'a str),
    /// Outside the catalog prefix, or nested deeper than one segment.
    Foreign,
}

impl<'a> PathKind<'a> {
    /// Classify a decoded path against a catalog route prefix.
    ///
    /// Both sides are compared without trailing slashes; a root prefix
    /// (`/`) puts every single-segment path in the catalog.
    pub fn parse(path: &'a str, route_prefix: &str) -> Self {
        let path = path.trim_end_matches('/');
        let prefix = route_prefix.trim_end_matches('/');

        if path == prefix {
            return Self::Index;
        }

        let Some(rest) = path.strip_prefix(prefix) else {
            return Self::Foreign;
        };
        let Some(segment) = rest.strip_prefix('/') else {
            // Prefix matched mid-segment (/mobilesxyz)
            return Self::Foreign;
        };

        if segment.is_empty() || segment.contains('/') {
            return Self::Foreign;
        }
        Self::Detail(segment)
    }

    /// Get the detail segment, if any.
    pub const fn segment(&self) -> Option<&'a str> {
        match self {
            Self::Detail(segment) => Some(segment),
            _ => None,
        }
    }
}
