//! # narwhal-bench
//!
//! Builds the shell commands that drive a Narwhal benchmark: cleanup,
//! compilation, key generation, primaries, workers, load clients and the tmux
//! sessions they run in. Nothing here executes a command.
//!
//! ## Usage
//!
//! ```bash
//! narwhal-bench primary --keys .node-0.json --committee .committee.json \
//!     --store .db-0 --parameters .parameters.json
//! narwhal-bench client 127.0.0.1:4003 --rate 50000 --nodes 127.0.0.1:4003
//! ```
//!
//! ## Modules
//!
//! - `app` - Logging setup and fatal error handling for the binary
//! - `cli` - Argument parsing, routing and output rendering
//! - `commands` - Command builders and file naming conventions
//! - `config` - Workload and credential defaults loaded from TOML
//! - `error` - Crate-level error type
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;


pub use commands::{CommandError, CommandMaker, PathMaker};
