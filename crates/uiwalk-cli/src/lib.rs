//! uiwalk CLI library.
//!
//! Core functionality for the uiwalk command-line interface: configuration
//! management, command execution, output formatting and CSV export.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, CliFormat, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
