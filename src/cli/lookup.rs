//! Lookup command implementation - identifier to primary slug.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::args::LookupArgs;
use crate::core::RoutePath;
use crate::resolver::Resolver;

#[derive(Debug, Serialize)]
struct LookupOutput {
    id: String,
    /// Primary slug, absent when the identifier is unregistered.
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    /// Non-primary slugs for the identifier.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<String>,
    canonical: RoutePath,
}

/// Execute lookup command
pub fn run_lookup(args: &LookupArgs, resolver: &Resolver) -> Result<()> {
    let outputs: Vec<LookupOutput> = args
        .ids
        .iter()
        .map(|id| lookup_one(id, resolver))
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&outputs)?;
        println!("{}", json);
        return Ok(());
    }

    for output in &outputs {
        match &output.slug {
            Some(slug) => {
                println!("{} {} {} {}", "✓".green(), output.id, "→".dimmed(), slug);
                if !output.aliases.is_empty() {
                    println!("  aliases: {}", output.aliases.join(", ").dimmed());
                }
            }
            None => {
                println!(
                    "{} {} {} no registered slug",
                    "✗".yellow(),
                    output.id,
                    "→".dimmed()
                );
            }
        }
        println!("  canonical: {}", output.canonical);
    }

    Ok(())
}

fn lookup_one(id: &str, resolver: &Resolver) -> LookupOutput {
    LookupOutput {
        id: id.to_string(),
        slug: resolver.map().resolve_to_slug(id).map(str::to_string),
        aliases: resolver.map().aliases_of(id).map(str::to_string).collect(),
        canonical: resolver.canonical_url(id, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{SlugEntry, SlugMap};

    fn test_resolver() -> Resolver {
        let map = SlugMap::from_entries([
            SlugEntry::new("apple-iphone-16-pro-max", "bltffc3e218b0c94c4a"),
            SlugEntry::new("iphone-16-pro-max", "bltffc3e218b0c94c4a"),
        ]);
        Resolver::new(map, RoutePath::from_route("/mobiles"), "blt")
    }

    #[test]
    fn test_lookup_registered() {
        let resolver = test_resolver();
        let output = lookup_one("bltffc3e218b0c94c4a", &resolver);
        assert_eq!(output.slug.as_deref(), Some("apple-iphone-16-pro-max"));
        assert_eq!(output.aliases, ["iphone-16-pro-max"]);
        assert_eq!(output.canonical, "/mobiles/apple-iphone-16-pro-max");
    }

    #[test]
    fn test_lookup_unregistered_degrades() {
        let resolver = test_resolver();
        let output = lookup_one("blt0123456789abcdef", &resolver);
        assert!(output.slug.is_none());
        assert!(output.aliases.is_empty());
        assert_eq!(output.canonical, "/mobiles/blt0123456789abcdef");
    }
}
