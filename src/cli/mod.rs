//! Command-line interface: argument definitions and command handlers.

pub mod args;
pub mod check;
pub mod list;
pub mod lookup;
pub mod resolve;

pub use args::{Cli, Commands};
