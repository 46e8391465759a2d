use chainctl_core::{CoreError, TestChainRpc};

use crate::cli::Command;

/// Run one subcommand against `rpc` and render its result as a single line.
pub async fn run(rpc: &dyn TestChainRpc, command: &Command) -> Result<String, CoreError> {
    let output = match command {
        Command::IncreaseTime { seconds } => rpc.advance_time(*seconds).await?.to_string(),
        Command::Mine { timestamp } => rpc.mine_block(*timestamp).await?,
        Command::Snapshot => rpc.snapshot().await?,
        Command::Revert { snapshot_id } => rpc.revert(snapshot_id).await?.to_string(),
    };
    tracing::debug!(?command, %output, "command finished");
    Ok(output)
}
