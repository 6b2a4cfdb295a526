//! Configuration management for `ruta.toml`.
//!
//! | Section               | Purpose                                   |
//! |-----------------------|-------------------------------------------|
//! | `[catalog]`           | Route prefix, identifier prefix           |
//! | `[[catalog.entries]]` | The static slug/identifier table          |

mod catalog;
mod error;

pub use catalog::CatalogConfig;
pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::log;

/// Root configuration structure representing ruta.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Catalog settings and the slug table
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration, searching upward from cwd for the config file.
    ///
    /// Unknown fields are reported as warnings (likely typos) but do not
    /// abort the load.
    pub fn load(config_name: &Path) -> Result<Self> {
        let config_path = match find_config_file(config_name) {
            Some(path) => path,
            None => anyhow::bail!(
                "config file `{}` not found in this or any parent directory",
                config_name.display()
            ),
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate the loaded configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.catalog.validate(&mut diag);
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

/// Search for the config file upward from the current directory.
fn find_config_file(name: &Path) -> Option<PathBuf> {
    // Absolute path: use as-is
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(name);
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[catalog]
route_prefix = "/mobiles"
id_prefix = "blt"

[[catalog.entries]]
slug = "samsung-galaxy-s24-ultra"
id = "blt6e248f3c32d25409"

[[catalog.entries]]
slug = "apple-iphone-16-pro-max"
id = "bltffc3e218b0c94c4a"
"#;

    #[test]
    fn test_from_str_sample() {
        let config = Config::from_str(SAMPLE).unwrap();
        assert_eq!(config.catalog.route_prefix, "/mobiles");
        assert_eq!(config.catalog.entries.len(), 2);
        assert_eq!(config.catalog.entries[0].slug, "samsung-galaxy-s24-ultra");
        assert_eq!(config.catalog.entries[0].id, "blt6e248f3c32d25409");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = Config::from_str("[catalog\nroute_prefix = \"/mobiles\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.catalog.route_prefix, "/mobiles");
        assert_eq!(config.catalog.id_prefix, "blt");
        assert!(config.catalog.entries.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[catalog]\nroute_prefix = \"/mobiles\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = Config::parse_with_ignored(content).unwrap();

        assert_eq!(config.catalog.route_prefix, "/mobiles");
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = Config::parse_with_ignored(SAMPLE).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_reports_table_errors() {
        let content = r#"
[[catalog.entries]]
slug = "pixel-9"
id = "blt1111111111111111"

[[catalog.entries]]
slug = "pixel-9"
id = "not-an-id"
"#;
        let config = Config::from_str(content).unwrap();
        let err = config.validate().unwrap_err();
        let text = err.to_string();
        assert!(text.contains("duplicate"));
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ruta.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = Config::from_path(&path).unwrap();
        assert_eq!(config.catalog.entries.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let path = PathBuf::from("/definitely/not/here/ruta.toml");
        assert!(Config::from_path(&path).is_err());
    }
}
