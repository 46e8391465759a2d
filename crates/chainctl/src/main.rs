mod cli;
mod commands;

use clap::Parser;
use eyre::eyre;

use chainctl_core::TestChainController;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so stdout carries only the command result.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let controller = TestChainController::new(args.node_config());
    let output = commands::run(&controller, &args.command)
        .await
        .map_err(|err| {
            let message = format_rpc_error(&args.rpc_url, &err.to_string());
            eyre!(message).wrap_err("while talking to the test chain node")
        })?;

    println!("{output}");
    Ok(())
}

/// Add a hint for the common "node isn't running" case.
fn format_rpc_error(rpc_url: &str, error: &str) -> String {
    let lower = error.to_ascii_lowercase();
    if lower.contains("connection failure") {
        format!(
            "{error}\n\nIs a dev node (ganache, hardhat, anvil) listening on {rpc_url}? \
             Set --rpc-url or CHAINCTL_RPC_URL to point elsewhere."
        )
    } else {
        error.to_owned()
    }
}
