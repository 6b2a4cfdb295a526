//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Ruta slug resolver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: ruta.toml)
    #[arg(short = 'C', long, default_value = "ruta.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve incoming path segments or full paths to routing decisions
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Reverse-lookup content identifiers to primary slugs
    #[command(visible_alias = "k")]
    Lookup {
        #[command(flatten)]
        args: LookupArgs,
    },

    /// List the slug table (diagnostics / sitemap feed)
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Validate the catalog table
    #[command(visible_alias = "c")]
    Check,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Path segments or full paths (starting with `/`) to resolve
    #[arg(value_name = "SEGMENT", required = true)]
    pub segments: Vec<String>,

    /// Output decisions as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Lookup command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct LookupArgs {
    /// Content identifiers to reverse-lookup
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,

    /// Output results as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// List command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// List distinct identifiers instead of slugs
    #[arg(short, long)]
    pub ids: bool,

    /// Output the full table as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_resolve(&self) -> bool {
        matches!(self.command, Commands::Resolve { .. })
    }
    pub const fn is_lookup(&self) -> bool {
        matches!(self.command, Commands::Lookup { .. })
    }
    pub const fn is_list(&self) -> bool {
        matches!(self.command, Commands::List { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
}
