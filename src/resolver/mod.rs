//! Slug resolver - translation between the public URL vocabulary (slugs)
//! and the CMS identifier vocabulary, in both directions.
//!
//! # Architecture
//!
//! ```text
//! URL space                          CMS space
//! =========                          =========
//! /mobiles/samsung-galaxy-s24-ultra  <->  blt6e248f3c32d25409
//! /mobiles/iphone-16-pro-max          ->  bltffc3e218b0c94c4a  (alias)
//! ```
//!
//! The resolver owns no mutable state after construction: it is a
//! read-only index over the catalog table and safe for unsynchronized
//! concurrent reads. Build it once in `main` and pass it by reference.

mod map;
mod route;

pub use map::{SlugEntry, SlugMap};
pub use route::RouteDecision;

use crate::config::CatalogConfig;
use crate::core::{ContentId, PathKind, RoutePath};

/// Read-only slug/identifier resolver for one catalog section.
#[derive(Debug)]
pub struct Resolver {
    map: SlugMap,
    /// Base path for canonical URLs (e.g. `/mobiles`).
    route_prefix: RoutePath,
    /// Expected identifier prefix (e.g. `blt`).
    id_prefix: String,
}

impl Resolver {
    /// Build a resolver from the catalog configuration.
    pub fn from_config(catalog: &CatalogConfig) -> Self {
        Self::new(
            SlugMap::from_entries(catalog.entries.iter().cloned()),
            RoutePath::from_route(&catalog.route_prefix),
            catalog.id_prefix.clone(),
        )
    }

    /// Build a resolver from an already-constructed map.
    pub fn new(map: SlugMap, route_prefix: RoutePath, id_prefix: impl Into<String>) -> Self {
        Self {
            map,
            route_prefix,
            id_prefix: id_prefix.into(),
        }
    }

    /// The underlying slug/identifier index.
    pub fn map(&self) -> &SlugMap {
        &self.map
    }

    /// Base path for canonical URLs.
    pub fn route_prefix(&self) -> &RoutePath {
        &self.route_prefix
    }

    /// Expected identifier prefix.
    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }

    /// Lexical test: does `value` look like a content identifier?
    ///
    /// Independent of registration - a string can look valid without
    /// being in the table.
    pub fn looks_like_identifier(&self, value: &str) -> bool {
        ContentId::matches_shape(value, &self.id_prefix)
    }

    /// Canonical route for a content item.
    ///
    /// Prefers the primary slug when one exists and `prefer_slug` is set;
    /// otherwise degrades to the identifier form. Never fails - an
    /// unregistered identifier still gets a well-formed path.
    pub fn canonical_url(&self, identifier: &str, prefer_slug: bool) -> RoutePath {
        if prefer_slug
            && let Some(slug) = self.map.resolve_to_slug(identifier)
        {
            return self.route_prefix.join(slug);
        }
        self.route_prefix.join(identifier)
    }

    /// Decide what a single path segment means.
    ///
    /// Known slug -> fetch by resolved identifier; identifier-shaped ->
    /// fetch by raw identifier; anything else -> not found.
    pub fn decide(&self, segment: &str) -> RouteDecision {
        if let Some(id) = self.map.resolve_to_identifier(segment) {
            return RouteDecision::Content {
                slug: segment.to_string(),
                id: id.clone(),
            };
        }
        if self.looks_like_identifier(segment) {
            return RouteDecision::RawIdentifier {
                id: ContentId::new(segment),
            };
        }
        RouteDecision::NotFound {
            segment: segment.to_string(),
        }
    }

    /// Decide a full decoded path against the catalog prefix.
    ///
    /// Returns `None` for paths outside the catalog (the caller's other
    /// routes handle those), `Some(decision)` for detail candidates.
    pub fn decide_path(&self, path: &RoutePath) -> Option<RouteDecision> {
        match PathKind::parse(path.as_str(), self.route_prefix.as_str()) {
            PathKind::Detail(segment) => Some(self.decide(segment)),
            PathKind::Index | PathKind::Foreign => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resolver() -> Resolver {
        let map = SlugMap::from_entries([
            SlugEntry::new("apple-iphone-16-pro-max", "bltffc3e218b0c94c4a"),
            SlugEntry::new("samsung-galaxy-s24-ultra", "blt6e248f3c32d25409"),
            SlugEntry::new("iphone-16-pro-max", "bltffc3e218b0c94c4a"),
        ]);
        Resolver::new(map, RoutePath::from_route("/mobiles"), "blt")
    }

    #[test]
    fn test_looks_like_identifier() {
        let resolver = sample_resolver();
        assert!(resolver.looks_like_identifier("blt6e248f3c32d25409"));
        // 15 hex chars
        assert!(!resolver.looks_like_identifier("blt6e248f3c32d2540"));
        assert!(!resolver.looks_like_identifier("samsung-galaxy-s24-ultra"));
        // Registration is irrelevant: unregistered but well-shaped
        assert!(resolver.looks_like_identifier("blt0123456789abcdef"));
    }

    #[test]
    fn test_canonical_url_prefers_slug() {
        let resolver = sample_resolver();
        assert_eq!(
            resolver.canonical_url("blt6e248f3c32d25409", true),
            "/mobiles/samsung-galaxy-s24-ultra"
        );
        // Primary slug, not the alias
        assert_eq!(
            resolver.canonical_url("bltffc3e218b0c94c4a", true),
            "/mobiles/apple-iphone-16-pro-max"
        );
    }

    #[test]
    fn test_canonical_url_identifier_form() {
        let resolver = sample_resolver();
        assert_eq!(
            resolver.canonical_url("blt6e248f3c32d25409", false),
            "/mobiles/blt6e248f3c32d25409"
        );
        // Unregistered identifier degrades gracefully, never fails
        assert_eq!(
            resolver.canonical_url("blt-not-registered", true),
            "/mobiles/blt-not-registered"
        );
    }

    #[test]
    fn test_decide_known_slug() {
        let resolver = sample_resolver();
        match resolver.decide("samsung-galaxy-s24-ultra") {
            RouteDecision::Content { slug, id } => {
                assert_eq!(slug, "samsung-galaxy-s24-ultra");
                assert_eq!(id, "blt6e248f3c32d25409");
            }
            other => panic!("expected Content, got {:?}", other),
        }
    }

    #[test]
    fn test_decide_raw_identifier() {
        let resolver = sample_resolver();
        match resolver.decide("blt0123456789abcdef") {
            RouteDecision::RawIdentifier { id } => {
                assert_eq!(id, "blt0123456789abcdef");
            }
            other => panic!("expected RawIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn test_decide_not_found() {
        let resolver = sample_resolver();
        assert!(matches!(
            resolver.decide("does-not-exist"),
            RouteDecision::NotFound { .. }
        ));
    }

    #[test]
    fn test_decide_registered_id_shaped_segment() {
        // A registered identifier used directly in the URL is not a slug,
        // so it routes as a raw identifier
        let resolver = sample_resolver();
        assert!(matches!(
            resolver.decide("blt6e248f3c32d25409"),
            RouteDecision::RawIdentifier { .. }
        ));
    }

    #[test]
    fn test_decide_path() {
        let resolver = sample_resolver();

        let hit = resolver
            .decide_path(&RoutePath::from_route("/mobiles/samsung-galaxy-s24-ultra"))
            .unwrap();
        assert!(hit.is_fetchable());

        // Index and foreign paths are someone else's business
        assert!(resolver
            .decide_path(&RoutePath::from_route("/mobiles"))
            .is_none());
        assert!(resolver
            .decide_path(&RoutePath::from_route("/news/iphone-16"))
            .is_none());
    }

    #[test]
    fn test_from_config() {
        use crate::config::CatalogConfig;

        let catalog = CatalogConfig {
            route_prefix: "/phones/".to_string(),
            id_prefix: "blt".to_string(),
            entries: vec![SlugEntry::new("pixel-9-pro", "blt00000000000000aa")],
        };
        let resolver = Resolver::from_config(&catalog);
        assert_eq!(resolver.route_prefix(), "/phones");
        assert_eq!(
            resolver.canonical_url("blt00000000000000aa", true),
            "/phones/pixel-9-pro"
        );
    }
}
