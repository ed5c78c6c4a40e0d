//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Routing subcommands to command builders
//! - Output rendering

pub mod args;
pub mod output;
pub mod router;

pub use args::{Cli, Commands, OutputFormat};
pub use output::render;
pub use router::execute_command;
