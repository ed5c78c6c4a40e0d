//! Command lines for every step of a benchmark run
//!
//! `CommandMaker` only builds strings. Running them, locally or over SSH, is
//! left to whatever orchestrates the benchmark.

use std::path::Path;

use tracing::debug;

use super::builder::{CommandChain, ShellCommand, ShellCommandBuilder};
use super::paths::{PathMaker, WorkerId};
use super::validation::{ensure_file_stem, ensure_non_negative, ensure_positive, CommandError};

pub const NODE_BINARY: &str = "node";
pub const CLIENT_BINARY: &str = "benchmark_client";
pub const RPC_CLIENT_BINARY: &str = "worker_rpc_client";

/// Every binary `alias_binaries` links into the working directory.
pub const BINARIES: [&str; 3] = [NODE_BINARY, CLIENT_BINARY, RPC_CLIENT_BINARY];

pub struct CommandMaker;

impl CommandMaker {
    /// Remove node stores and generated JSON files, then make sure the
    /// results directory exists.
    pub fn cleanup() -> String {
        let command = CommandChain::new()
            .then(ShellCommand::new("rm").args(["-r", ".db-*"]).build())
            .then(ShellCommand::new("rm").arg(".*.json").build())
            .then(
                ShellCommand::new("mkdir")
                    .args(["-p", PathMaker::results_path()])
                    .build(),
            )
            .to_string();
        debug!(%command, "Built cleanup command");
        command
    }

    pub fn clean_logs() -> String {
        let command = CommandChain::new()
            .then(
                ShellCommand::new("rm")
                    .args(["-r", PathMaker::logs_path()])
                    .build(),
            )
            .then(
                ShellCommand::new("mkdir")
                    .args(["-p", PathMaker::logs_path()])
                    .build(),
            )
            .to_string();
        debug!(%command, "Built log cleanup command");
        command
    }

    pub fn compile() -> String {
        let command = ShellCommand::new("cargo")
            .args(["build", "--quiet", "--release", "--features", "benchmark"])
            .build()
            .to_string();
        debug!(%command, "Built compile command");
        command
    }

    pub fn generate_key(filename: &str) -> String {
        let command = ShellCommand::new(&local(NODE_BINARY))
            .arg("generate_keys")
            .flag("--filename", filename)
            .build()
            .to_string();
        debug!(%command, "Built key generation command");
        command
    }

    pub fn run_primary(
        keys: &str,
        committee: &str,
        store: &str,
        parameters: &str,
        debug: bool,
    ) -> String {
        let command = node_run(keys, committee, store, parameters, debug)
            .arg("primary")
            .build()
            .to_string();
        debug!(%command, "Built primary command");
        command
    }

    pub fn run_worker(
        keys: &str,
        committee: &str,
        store: &str,
        parameters: &str,
        id: WorkerId,
        debug: bool,
    ) -> String {
        let command = node_run(keys, committee, store, parameters, debug)
            .arg("worker")
            .flag("--id", id)
            .build()
            .to_string();
        debug!(%command, worker = id, "Built worker command");
        command
    }

    /// Launch a load generator submitting transactions to `address`.
    ///
    /// `nodes` lists the addresses the client waits for before sending; the
    /// `--nodes` flag is left out when it is empty.
    pub fn run_client<S: AsRef<str>>(
        address: &str,
        size: i64,
        burst: i64,
        rate: i64,
        nodes: &[S],
    ) -> Result<String, CommandError> {
        let command = workload(&local(CLIENT_BINARY), address, size, burst, rate, nodes)?
            .build()
            .to_string();
        debug!(%command, "Built client command");
        Ok(command)
    }

    /// Launch the RPC transaction client against a worker endpoint.
    ///
    /// The credentials end up in the returned line verbatim; they are kept out
    /// of log events.
    #[allow(clippy::too_many_arguments)]
    pub fn run_worker_rpc_client<S: AsRef<str>>(
        endpoint: &str,
        size: i64,
        burst: i64,
        rate: i64,
        nodes: &[S],
        jwt: &str,
        mnemonic: &str,
        txs: i64,
    ) -> Result<String, CommandError> {
        let builder = workload(&local(RPC_CLIENT_BINARY), endpoint, size, burst, rate, nodes)?;
        let txs = ensure_positive("txs", txs)?;
        let command = builder
            .flag("--jwt-secret", jwt)
            .flag("--mnemonic", mnemonic)
            .flag("--transactions", txs)
            .build()
            .to_string();
        debug!(endpoint, size, burst, rate, txs, "Built RPC client command");
        Ok(command)
    }

    pub fn kill() -> String {
        let command = ShellCommand::new("tmux").arg("kill-server").build().to_string();
        debug!(%command, "Built kill command");
        command
    }

    /// Replace the local binary links with links into `origin`.
    pub fn alias_binaries(origin: &str) -> String {
        let mut chain = CommandChain::new();
        for binary in BINARIES {
            chain = chain.then(ShellCommand::new("rm").arg(binary).build());
        }
        for binary in BINARIES {
            let target = Path::new(origin).join(binary).display().to_string();
            chain = chain.then(
                ShellCommand::new("ln")
                    .args(["-s", target.as_str(), "."])
                    .build(),
            );
        }
        let command = chain.to_string();
        debug!(%command, origin, "Built alias command");
        command
    }

    /// Run `command` in a detached tmux session named after the log file,
    /// mirroring its output into `log_file`. `kill()` tears these down.
    ///
    /// `log_file` must have a file stem, since tmux rejects unnamed sessions.
    pub fn run_in_background(command: &str, log_file: &str) -> Result<String, CommandError> {
        let name = ensure_file_stem("log_file", log_file)?;
        let line = ShellCommand::new("tmux")
            .args(["new", "-d", "-s"])
            .arg(format!("\"{name}\""))
            .arg(format!("\"{command} |& tee {log_file}\""))
            .build()
            .to_string();
        debug!(session = name, log_file, "Built background session command");
        Ok(line)
    }
}

fn local(binary: &str) -> String {
    format!("./{binary}")
}

fn verbosity(debug: bool) -> &'static str {
    if debug {
        "-vvv"
    } else {
        "-vv"
    }
}

fn node_run(
    keys: &str,
    committee: &str,
    store: &str,
    parameters: &str,
    debug: bool,
) -> ShellCommandBuilder {
    ShellCommand::new(&local(NODE_BINARY))
        .arg(verbosity(debug))
        .arg("run")
        .flag("--keys", keys)
        .flag("--committee", committee)
        .flag("--store", store)
        .flag("--parameters", parameters)
}

/// The flags both client binaries share, ending with the (possibly empty)
/// nodes section.
fn workload<S: AsRef<str>>(
    program: &str,
    target: &str,
    size: i64,
    burst: i64,
    rate: i64,
    nodes: &[S],
) -> Result<ShellCommandBuilder, CommandError> {
    let size = ensure_positive("size", size)?;
    let burst = ensure_positive("burst", burst)?;
    let rate = ensure_non_negative("rate", rate)?;

    Ok(ShellCommand::new(program)
        .arg(target)
        .flag("--size", size)
        .flag("--burst", burst)
        .flag("--rate", rate)
        .arg(nodes_section(nodes)))
}

fn nodes_section<S: AsRef<str>>(nodes: &[S]) -> String {
    if nodes.is_empty() {
        return String::new();
    }
    let joined = nodes
        .iter()
        .map(|node| node.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    format!("--nodes {joined}")
}
