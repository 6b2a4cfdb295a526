//! List command implementation - enumerate the slug table.
//!
//! Plain output feeds scripts and sitemap generation; `--json` emits the
//! full table with canonical routes.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use super::args::ListArgs;
use crate::core::RoutePath;
use crate::log;
use crate::resolver::Resolver;

/// One identifier with its slugs and canonical route.
#[derive(Debug, Serialize)]
struct ListRow {
    id: String,
    slug: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<String>,
    canonical: RoutePath,
}

/// Execute list command
pub fn run_list(args: &ListArgs, resolver: &Resolver) -> Result<()> {
    let content = if args.json {
        render_json(resolver, args.pretty)?
    } else if args.ids {
        resolver
            .map()
            .known_identifiers()
            .map(|id| id.as_str().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        resolver.map().known_slugs().collect::<Vec<_>>().join("\n")
    };

    match &args.output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("failed to create `{}`", path.display()))?;
            writeln!(file, "{}", content)?;
            log!("list"; "wrote {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}

fn render_json(resolver: &Resolver, pretty: bool) -> Result<String> {
    let rows: Vec<ListRow> = resolver
        .map()
        .known_identifiers()
        .map(|id| {
            // Every enumerated identifier has a primary slug by construction
            let slug = resolver
                .map()
                .resolve_to_slug(id.as_str())
                .unwrap_or_default()
                .to_string();
            ListRow {
                id: id.as_str().to_string(),
                aliases: resolver
                    .map()
                    .aliases_of(id.as_str())
                    .map(str::to_string)
                    .collect(),
                canonical: resolver.canonical_url(id.as_str(), true),
                slug,
            }
        })
        .collect();

    let json = if pretty {
        serde_json::to_string_pretty(&rows)?
    } else {
        serde_json::to_string(&rows)?
    };
    Ok(json)
}
