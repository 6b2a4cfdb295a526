//! Ruta - slug and content-id resolution for CMS-backed catalog routes.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod logger;
mod resolver;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};

use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli.config)?;
    debug!("config"; "loaded {}", config.config_path.display());

    match &cli.command {
        Commands::Check => cli::check::run_check(&config),
        Commands::Resolve { args } => {
            let resolver = cli::check::load_resolver(&config)?;
            cli::resolve::run_resolve(args, &resolver)
        }
        Commands::Lookup { args } => {
            let resolver = cli::check::load_resolver(&config)?;
            cli::lookup::run_lookup(args, &resolver)
        }
        Commands::List { args } => {
            let resolver = cli::check::load_resolver(&config)?;
            cli::list::run_list(args, &resolver)
        }
    }
}
