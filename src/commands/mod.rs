//! Benchmark command construction
//!
//! - `builder` - program-plus-words command lines and `;` chains
//! - `maker` - one builder per benchmark step (cleanup, nodes, clients, tmux)
//! - `paths` - file naming conventions the generated commands rely on
//! - `validation` - range checks raising `CommandError::InvalidArgument`

pub mod builder;
pub mod maker;
pub mod paths;
pub mod validation;


pub use builder::{join_words, split_words, CommandChain, ShellCommand, ShellCommandBuilder};
pub use maker::{CommandMaker, BINARIES, CLIENT_BINARY, NODE_BINARY, RPC_CLIENT_BINARY};
pub use paths::{NodeIndex, PathMaker, WorkerId};
pub use validation::{Bound, CommandError};
