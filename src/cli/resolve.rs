//! Resolve command implementation.
//!
//! Accepts bare path segments or full paths (anything starting with `/`)
//! and prints the routing decision for each, mirroring what the site
//! router does with an incoming request.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::args::ResolveArgs;
use crate::core::{PathKind, RoutePath};
use crate::debug;
use crate::resolver::{Resolver, RouteDecision};

/// Decision for one input, tagged with the original query.
#[derive(Debug, Serialize)]
struct ResolveOutput {
    query: String,
    #[serde(flatten)]
    decision: RouteDecision,
    /// Canonical route for fetchable decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<RoutePath>,
}

/// Execute resolve command
pub fn run_resolve(args: &ResolveArgs, resolver: &Resolver) -> Result<()> {
    let outputs: Vec<ResolveOutput> = args
        .segments
        .iter()
        .map(|input| resolve_input(input, resolver))
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&outputs)?;
        println!("{}", json);
        return Ok(());
    }

    for output in &outputs {
        print_decision(output);
    }

    // Non-zero exit when anything failed to resolve, for scripting
    let misses = outputs
        .iter()
        .filter(|o| !o.decision.is_fetchable())
        .count();
    if misses > 0 {
        anyhow::bail!(
            "{} of {} input(s) did not resolve",
            misses,
            outputs.len()
        );
    }
    Ok(())
}

/// Resolve one input: a full path goes through prefix classification,
/// a bare segment is decided directly.
fn resolve_input(input: &str, resolver: &Resolver) -> ResolveOutput {
    let decision = if input.starts_with('/') {
        let path = RoutePath::from_browser(input);
        debug!("resolve"; "decoded `{}` -> `{}`", input, path);

        match PathKind::parse(path.as_str(), resolver.route_prefix().as_str()) {
            PathKind::Detail(segment) => resolver.decide(segment),
            PathKind::Index | PathKind::Foreign => RouteDecision::NotFound {
                segment: path.as_str().to_string(),
            },
        }
    } else {
        resolver.decide(input)
    };

    let canonical = decision
        .id()
        .map(|id| resolver.canonical_url(id.as_str(), true));

    ResolveOutput {
        query: input.to_string(),
        decision,
        canonical,
    }
}

fn print_decision(output: &ResolveOutput) {
    match &output.decision {
        RouteDecision::Content { slug, id } => {
            println!(
                "{} {} {} {} ({})",
                "✓".green(),
                output.query,
                "→".dimmed(),
                id,
                slug.dimmed()
            );
        }
        RouteDecision::RawIdentifier { id } => {
            println!(
                "{} {} {} {} {}",
                "✓".green(),
                output.query,
                "→".dimmed(),
                id,
                "(raw identifier, not registered)".dimmed()
            );
        }
        RouteDecision::NotFound { segment } => {
            println!(
                "{} {} {} not found",
                "✗".red(),
                segment,
                "→".dimmed()
            );
        }
    }
    if let Some(canonical) = &output.canonical {
        println!("  canonical: {}", canonical);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoutePath;
    use crate::resolver::{SlugEntry, SlugMap};

    fn test_resolver() -> Resolver {
        let map = SlugMap::from_entries([SlugEntry::new(
            "samsung-galaxy-s24-ultra",
            "blt6e248f3c32d25409",
        )]);
        Resolver::new(map, RoutePath::from_route("/mobiles"), "blt")
    }

    #[test]
    fn test_resolve_bare_segment() {
        let resolver = test_resolver();
        let output = resolve_input("samsung-galaxy-s24-ultra", &resolver);
        assert!(output.decision.is_fetchable());
        assert_eq!(
            output.canonical.unwrap(),
            "/mobiles/samsung-galaxy-s24-ultra"
        );
    }

    #[test]
    fn test_resolve_full_path() {
        let resolver = test_resolver();
        let output = resolve_input("/mobiles/samsung-galaxy-s24-ultra", &resolver);
        assert!(output.decision.is_fetchable());
    }

    #[test]
    fn test_resolve_foreign_path_not_found() {
        let resolver = test_resolver();
        let output = resolve_input("/news/today", &resolver);
        assert!(!output.decision.is_fetchable());
        assert!(output.canonical.is_none());
    }

    #[test]
    fn test_resolve_raw_identifier_canonical_degrades() {
        let resolver = test_resolver();
        // Unregistered but identifier-shaped: canonical keeps the ID form
        let output = resolve_input("blt0123456789abcdef", &resolver);
        assert_eq!(output.canonical.unwrap(), "/mobiles/blt0123456789abcdef");
    }

    #[test]
    fn test_output_json_shape() {
        let resolver = test_resolver();
        let output = resolve_input("samsung-galaxy-s24-ultra", &resolver);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["query"], "samsung-galaxy-s24-ultra");
        assert_eq!(json["kind"], "content");
        assert_eq!(json["canonical"], "/mobiles/samsung-galaxy-s24-ultra");
    }
}
