//! SlugMap - the core bidirectional mapping between slugs and content IDs.
//!
//! Built once from the configuration table, immutable afterwards. All
//! lookups are total: a miss is `None`, never an error.

use rustc_hash::FxHashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::ContentId;

/// One row of the catalog table: a slug and the content ID it names.
///
/// Several slugs may carry the same ID (aliases). Table order decides
/// which one is primary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlugEntry {
    /// Human-readable, URL-safe key.
    pub slug: String,
    /// CMS content identifier.
    pub id: ContentId,
}

impl SlugEntry {
    /// Create an entry from a slug/identifier pair.
    pub fn new(slug: impl Into<String>, id: impl Into<ContentId>) -> Self {
        Self {
            slug: slug.into(),
            id: id.into(),
        }
    }
}

/// Bidirectional slug/identifier index.
///
/// Invariants:
/// - Forward keys (slugs) are unique; on duplicate input the first entry
///   wins and later ones are dropped (validation reports them upstream).
/// - Reverse holds at most one slug per identifier: the first slug seen
///   for that identifier in table order (the "primary" slug). Aliases
///   registered later never overwrite it.
#[derive(Debug, Default)]
pub struct SlugMap {
    /// slug -> identifier
    forward: FxHashMap<Arc<str>, ContentId>,
    /// identifier -> primary slug
    reverse: FxHashMap<ContentId, Arc<str>>,
    /// Distinct slugs in table order.
    slugs: Vec<Arc<str>>,
    /// Distinct identifiers in first-seen order.
    identifiers: Vec<ContentId>,
}

impl SlugMap {
    /// Build the index from the configuration table.
    ///
    /// Pure construction: no I/O, no globals. The returned map is never
    /// mutated again.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = SlugEntry>,
    {
        let mut map = Self::default();

        for entry in entries {
            let slug: Arc<str> = Arc::from(entry.slug.as_str());

            // First slug wins on duplicates, keeping the forward map
            // deterministic even if validation was skipped
            if map.forward.contains_key(slug.as_ref()) {
                continue;
            }
            map.forward.insert(slug.clone(), entry.id.clone());
            map.slugs.push(slug.clone());

            // First slug seen for an identifier is its primary slug
            if !map.reverse.contains_key(&entry.id) {
                map.reverse.insert(entry.id.clone(), slug);
                map.identifiers.push(entry.id);
            }
        }

        map
    }

    /// Forward lookup: slug -> identifier.
    ///
    /// Exact, case-sensitive match. A miss is an expected outcome (stale
    /// bookmarks, typos), not an error.
    pub fn resolve_to_identifier(&self, slug: &str) -> Option<&ContentId> {
        self.forward.get(slug)
    }

    /// Reverse lookup: identifier -> primary slug.
    pub fn resolve_to_slug(&self, identifier: &str) -> Option<&str> {
        self.reverse.get(identifier).map(Arc::as_ref)
    }

    /// Membership test against the forward map. No lexical validation.
    pub fn is_known_slug(&self, value: &str) -> bool {
        self.forward.contains_key(value)
    }

    /// Check if an identifier has at least one registered slug.
    pub fn is_known_identifier(&self, value: &str) -> bool {
        self.reverse.contains_key(value)
    }

    /// All registered slugs (aliases included), in table order.
    pub fn known_slugs(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(Arc::as_ref)
    }

    /// Distinct identifiers, in first-seen order.
    pub fn known_identifiers(&self) -> impl Iterator<Item = &ContentId> {
        self.identifiers.iter()
    }

    /// Number of distinct slugs.
    pub fn slug_count(&self) -> usize {
        self.slugs.len()
    }

    /// Number of distinct identifiers, regardless of alias count.
    pub fn identifier_count(&self) -> usize {
        self.identifiers.len()
    }

    /// Number of non-primary slugs.
    pub fn alias_count(&self) -> usize {
        self.slugs.len() - self.identifiers.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    /// Non-primary slugs for an identifier, in table order.
    pub fn aliases_of<'a>(&'a self, identifier: &'a str) -> impl Iterator<Item = &'a str> {
        self.slugs.iter().map(Arc::as_ref).filter(move |slug| {
            self.forward.get(*slug).is_some_and(|id| *id == identifier)
                && self.resolve_to_slug(identifier) != Some(*slug)
        })
    }
}
