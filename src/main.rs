use anyhow::{Context, Result};
use clap::Parser;
use narwhal_bench::app::{handle_fatal_error, init_logging, AppConfig};
use narwhal_bench::cli::{execute_command, render, Cli};
use narwhal_bench::config::ConfigLoader;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let config = match AppConfig::new(verbose) {
        Ok(config) => config.with_config_file(cli.config.clone()),
        Err(e) => handle_fatal_error(e, verbose),
    };
    init_logging(&config);

    if let Err(e) = run(cli, &config) {
        handle_fatal_error(e, verbose);
    }
}

fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    let bench_config = ConfigLoader::new(&config.working_dir)
        .load(config.config_file.as_deref())
        .context("Failed to load configuration")?;
    debug!("Using configuration: {:?}", bench_config.client);

    let line = execute_command(cli.command, &bench_config)?;
    let output = render(&line, cli.format).context("Failed to render command")?;
    println!("{output}");
    Ok(())
}
