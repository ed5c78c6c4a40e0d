//! Command routing
//!
//! Maps each parsed subcommand to the builder that produces its line,
//! filling unset workload and credential values from the loaded config.

use crate::cli::args::{Commands, PathKind, WorkloadArgs};
use crate::commands::{join_words, CommandMaker, PathMaker};
use crate::config::{BenchConfig, ClientConfig, ENV_JWT_SECRET, ENV_MNEMONIC};
use crate::error::Error;
use anyhow::{Context, Result};
use tracing::info;

/// Build the command line for a parsed subcommand
pub fn execute_command(command: Commands, config: &BenchConfig) -> Result<String> {
    let line = match command {
        Commands::Cleanup => CommandMaker::cleanup(),
        Commands::CleanLogs => CommandMaker::clean_logs(),
        Commands::Compile => CommandMaker::compile(),
        Commands::GenerateKey { filename } => CommandMaker::generate_key(&filename),
        Commands::Primary { node, debug } => CommandMaker::run_primary(
            &node.keys,
            &node.committee,
            &node.store,
            &node.parameters,
            debug,
        ),
        Commands::Worker { node, id, debug } => CommandMaker::run_worker(
            &node.keys,
            &node.committee,
            &node.store,
            &node.parameters,
            id,
            debug,
        ),
        Commands::Client { address, workload } => {
            let workload = resolve_workload(workload, &config.client);
            CommandMaker::run_client(
                &address,
                workload.size,
                workload.burst,
                workload.rate,
                &workload.nodes,
            )
            .map_err(Error::from)
            .context("Failed to build client command")?
        }
        Commands::RpcClient {
            endpoint,
            workload,
            jwt_secret,
            mnemonic,
            transactions,
        } => {
            let workload = resolve_workload(workload, &config.client);
            let jwt = required(jwt_secret, &config.rpc.jwt_secret, "--jwt-secret", ENV_JWT_SECRET)?;
            let mnemonic = required(mnemonic, &config.rpc.mnemonic, "--mnemonic", ENV_MNEMONIC)?;
            let txs = transactions.unwrap_or(config.rpc.transactions);
            CommandMaker::run_worker_rpc_client(
                &endpoint,
                workload.size,
                workload.burst,
                workload.rate,
                &workload.nodes,
                &jwt,
                &mnemonic,
                txs,
            )
            .map_err(Error::from)
            .context("Failed to build RPC client command")?
        }
        Commands::Kill => CommandMaker::kill(),
        Commands::Alias { origin } => {
            let origin = origin.unwrap_or_else(|| config.binary_origin());
            CommandMaker::alias_binaries(&origin.display().to_string())
        }
        Commands::Background { log_file, command } => {
            CommandMaker::run_in_background(&join_words(&command), &log_file)
                .map_err(Error::from)
                .context("Failed to build background command")?
        }
        Commands::Path { kind } => resolve_path(kind),
    };

    info!("Generated command");
    Ok(line)
}

fn resolve_workload(args: WorkloadArgs, defaults: &ClientConfig) -> ClientConfig {
    ClientConfig {
        size: args.size.unwrap_or(defaults.size),
        burst: args.burst.unwrap_or(defaults.burst),
        rate: args.rate.unwrap_or(defaults.rate),
        nodes: if args.nodes.is_empty() {
            defaults.nodes.clone()
        } else {
            args.nodes
        },
    }
}

fn required(
    flag: Option<String>,
    configured: &Option<String>,
    name: &str,
    env: &str,
) -> Result<String> {
    flag.or_else(|| configured.clone()).ok_or_else(|| {
        Error::Config(format!(
            "{name} is required: pass it, set it in the config file, or export {env}"
        ))
        .into()
    })
}

fn resolve_path(kind: PathKind) -> String {
    match kind {
        PathKind::Binaries => PathMaker::binary_path().display().to_string(),
        PathKind::NodeCrate => PathMaker::node_crate_path().display().to_string(),
        PathKind::Committee => PathMaker::committee_file().to_string(),
        PathKind::Parameters => PathMaker::parameters_file().to_string(),
        PathKind::Key { node } => PathMaker::key_file(node),
        PathKind::Db { node, worker } => PathMaker::db_path(node, worker),
        PathKind::Logs => PathMaker::logs_path().to_string(),
        PathKind::PrimaryLog { node } => PathMaker::primary_log_file(node).display().to_string(),
        PathKind::WorkerLog { node, worker } => {
            PathMaker::worker_log_file(node, worker).display().to_string()
        }
        PathKind::ClientLog { node, worker } => {
            PathMaker::client_log_file(node, worker).display().to_string()
        }
        PathKind::Results => PathMaker::results_path().to_string(),
        PathKind::ResultFile {
            faults,
            nodes,
            workers,
            collocate,
            rate,
            tx_size,
        } => PathMaker::result_file(faults, nodes, workers, collocate, rate, tx_size)
            .display()
            .to_string(),
        PathKind::Plots => PathMaker::plots_path().to_string(),
    }
}
