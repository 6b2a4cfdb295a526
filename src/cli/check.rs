//! Check command implementation - validate the catalog table.

use anyhow::Result;

use crate::config::{Config, ConfigDiagnostics};
use crate::log;
use crate::resolver::{Resolver, SlugMap};
use crate::utils::plural_count;

/// Execute check command
pub fn run_check(config: &Config) -> Result<()> {
    let mut diag = ConfigDiagnostics::new();
    config.catalog.validate(&mut diag);

    // Summary is useful even when the table has problems
    let map = SlugMap::from_entries(config.catalog.entries.iter().cloned());
    log!(
        "check";
        "{}, {}, {}",
        plural_count(map.slug_count(), "slug"),
        plural_count(map.identifier_count(), "identifier"),
        plural_count(map.alias_count(), "alias")
    );

    if !diag.is_empty() {
        eprintln!("{}", diag);
        anyhow::bail!("catalog validation failed");
    }

    log!("check"; "catalog ok ({})", config.config_path.display());
    Ok(())
}

/// Validate and build the resolver for commands that need a sane table.
pub fn load_resolver(config: &Config) -> Result<Resolver> {
    config.validate()?;
    Ok(Resolver::from_config(&config.catalog))
}
