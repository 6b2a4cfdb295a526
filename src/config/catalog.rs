//! `[catalog]` section: the static slug table and its route settings.

use serde::{Deserialize, Serialize};

use super::ConfigDiagnostics;
use crate::core::{ContentId, DEFAULT_ID_PREFIX, ID_PREFIX_LEN};
use crate::resolver::SlugEntry;

/// Catalog configuration
///
/// The entries table is the deployed source of truth for slug/identifier
/// pairs. Order matters: the first slug listed for an identifier becomes
/// its primary slug for reverse lookup and canonical links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base path for canonical catalog URLs.
    pub route_prefix: String,

    /// Identifier prefix assigned by the content store.
    pub id_prefix: String,

    /// The slug table, in deployment order.
    pub entries: Vec<SlugEntry>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            route_prefix: "/mobiles".to_string(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            entries: Vec::new(),
        }
    }
}

impl CatalogConfig {
    /// Validate the section, collecting every problem instead of stopping
    /// at the first one.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.validate_id_prefix(diag);
        self.validate_entries(diag);
    }

    fn validate_id_prefix(&self, diag: &mut ConfigDiagnostics) {
        let ok = self.id_prefix.len() == ID_PREFIX_LEN
            && self.id_prefix.bytes().all(|b| b.is_ascii_lowercase());
        if !ok {
            diag.error_with_hint(
                "catalog.id_prefix",
                format!("`{}` is not a valid identifier prefix", self.id_prefix),
                format!(
                    "expected exactly {} ASCII lowercase letters, e.g. `{}`",
                    ID_PREFIX_LEN, DEFAULT_ID_PREFIX
                ),
            );
        }
    }

    fn validate_entries(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = rustc_hash::FxHashSet::default();

        for (index, entry) in self.entries.iter().enumerate() {
            let field = |name: &str| format!("catalog.entries[{}].{}", index, name);

            if entry.slug.is_empty() {
                diag.error(field("slug"), "slug is empty");
            } else if !is_url_safe_slug(&entry.slug) {
                diag.error_with_hint(
                    field("slug"),
                    format!("`{}` is not URL-safe", entry.slug),
                    "use lowercase letters, digits and `-` only",
                );
            }

            if !seen.insert(entry.slug.as_str()) {
                diag.error_with_hint(
                    field("slug"),
                    format!("duplicate slug `{}`", entry.slug),
                    "slugs must be unique; only the first entry is used",
                );
            }

            if !ContentId::matches_shape(entry.id.as_str(), &self.id_prefix) {
                diag.error_with_hint(
                    field("id"),
                    format!("`{}` does not look like a content ID", entry.id),
                    format!("expected `{}` + 16 lowercase hex characters", self.id_prefix),
                );
            }
        }
    }
}

/// Check a slug for URL-safety: lowercase letters, digits and hyphens.
fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= 200
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
