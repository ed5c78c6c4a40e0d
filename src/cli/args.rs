//! CLI argument structures
//!
//! One subcommand per command the benchmark needs. Every subcommand prints
//! the command line it builds and never runs it.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{NodeIndex, WorkerId};

/// Build the shell commands that drive a Narwhal benchmark
#[derive(Parser)]
#[command(name = "narwhal-bench")]
#[command(about = "narwhal-bench - Build the shell commands that drive a Narwhal benchmark", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file with workload and credential defaults
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// How to print the generated command
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The command line as-is
    Text,
    /// The command line and its argv split as JSON
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Remove node stores and generated files, recreate the results directory
    Cleanup,

    /// Remove and recreate the logs directory
    #[command(name = "clean-logs")]
    CleanLogs,

    /// Build the release binaries with the benchmark feature
    Compile,

    /// Generate a node key pair
    #[command(name = "generate-key")]
    GenerateKey {
        /// File the key pair is written to
        #[arg(long)]
        filename: String,
    },

    /// Run a primary
    Primary {
        #[command(flatten)]
        node: NodeArgs,

        /// Log at debug level (-vvv) instead of info (-vv)
        #[arg(long)]
        debug: bool,
    },

    /// Run a worker
    Worker {
        #[command(flatten)]
        node: NodeArgs,

        /// Worker id within the authority
        #[arg(long)]
        id: WorkerId,

        /// Log at debug level (-vvv) instead of info (-vv)
        #[arg(long)]
        debug: bool,
    },

    /// Run the load-generating benchmark client
    Client {
        /// Transactions address of the target worker
        address: String,

        #[command(flatten)]
        workload: WorkloadArgs,
    },

    /// Run the RPC transaction client against a worker endpoint
    #[command(name = "rpc-client")]
    RpcClient {
        /// RPC endpoint of the target worker
        endpoint: String,

        #[command(flatten)]
        workload: WorkloadArgs,

        /// JWT secret for the endpoint (defaults to the config or NARWHAL_BENCH_JWT_SECRET)
        #[arg(long)]
        jwt_secret: Option<String>,

        /// Wallet mnemonic (defaults to the config or NARWHAL_BENCH_MNEMONIC)
        #[arg(long)]
        mnemonic: Option<String>,

        /// Number of transactions to submit
        #[arg(long, allow_negative_numbers = true)]
        transactions: Option<i64>,
    },

    /// Kill every tmux session
    Kill,

    /// Link the release binaries into the working directory
    Alias {
        /// Directory holding the binaries (defaults to the config or ../target/release)
        #[arg(long)]
        origin: Option<PathBuf>,
    },

    /// Wrap a command in a detached tmux session logging to a file
    Background {
        /// Log file; its stem names the session
        #[arg(long)]
        log_file: String,

        /// Command to run in the session
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Print one of the benchmark's file naming conventions
    Path {
        #[command(subcommand)]
        kind: PathKind,
    },
}

#[derive(Args)]
pub struct NodeArgs {
    /// File containing the node keys
    #[arg(long)]
    pub keys: String,

    /// File containing committee information
    #[arg(long)]
    pub committee: String,

    /// Directory where the node creates its store
    #[arg(long)]
    pub store: String,

    /// File containing the node parameters
    #[arg(long)]
    pub parameters: String,
}

/// Workload flags shared by both clients. Unset values come from the config.
#[derive(Args)]
pub struct WorkloadArgs {
    /// Transaction size in bytes
    #[arg(long, allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Transactions sent back to back per tick
    #[arg(long, allow_negative_numbers = true)]
    pub burst: Option<i64>,

    /// Transactions per second
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<i64>,

    /// Addresses to wait for before sending
    #[arg(long, num_args = 1..)]
    pub nodes: Vec<String>,
}

#[derive(Subcommand)]
pub enum PathKind {
    /// Directory holding the release binaries
    Binaries,
    /// Node crate directory
    NodeCrate,
    /// Committee file
    Committee,
    /// Parameters file
    Parameters,
    /// Key file of a node
    Key { node: NodeIndex },
    /// Store directory of a primary, or of one of its workers
    Db {
        node: NodeIndex,
        #[arg(long)]
        worker: Option<WorkerId>,
    },
    /// Logs directory
    Logs,
    /// Log file of a primary
    PrimaryLog { node: NodeIndex },
    /// Log file of a worker
    WorkerLog { node: NodeIndex, worker: WorkerId },
    /// Log file of a client
    ClientLog { node: NodeIndex, worker: WorkerId },
    /// Results directory
    Results,
    /// Result file of one benchmark configuration
    #[command(name = "result")]
    ResultFile {
        #[arg(long)]
        faults: usize,
        #[arg(long)]
        nodes: usize,
        #[arg(long)]
        workers: usize,
        #[arg(long)]
        collocate: bool,
        #[arg(long)]
        rate: u64,
        #[arg(long)]
        tx_size: usize,
    },
    /// Plots directory
    Plots,
}
