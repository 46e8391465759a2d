use std::time::Duration;

use chainctl_core::config::DEFAULT_RPC_URL;
use chainctl_core::NodeConfig;
use clap::{Parser, Subcommand};

/// chainctl — drive a local EVM test chain: time travel, mining, snapshots.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Test chain JSON-RPC URL.
    #[arg(long, default_value = DEFAULT_RPC_URL, env = "CHAINCTL_RPC_URL")]
    pub rpc_url: String,

    /// Seconds allowed for establishing the connection.
    #[arg(long, default_value = "10", env = "CHAINCTL_CONNECT_TIMEOUT_SECS",
          value_parser = clap::value_parser!(u64).range(1..))]
    pub connect_timeout_secs: u64,

    /// Seconds allowed for a whole request.
    #[arg(long, default_value = "30", env = "CHAINCTL_REQUEST_TIMEOUT_SECS",
          value_parser = clap::value_parser!(u64).range(1..))]
    pub request_timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Jump forward in time (evm_increaseTime); prints the total offset.
    IncreaseTime {
        /// Seconds to add; negative values are passed through to the node.
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },
    /// Force a block to be mined (evm_mine); prints the node's result.
    Mine {
        /// Block timestamp; omitted or non-positive lets the node choose.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        timestamp: i64,
    },
    /// Snapshot chain state (evm_snapshot); prints the snapshot id.
    Snapshot,
    /// Revert to a snapshot (evm_revert); prints true or false.
    Revert {
        /// Snapshot id; empty lets the node pick its latest snapshot.
        #[arg(default_value = "")]
        snapshot_id: String,
    },
}

impl Cli {
    /// A blank URL (e.g. `CHAINCTL_RPC_URL=" "`) falls back to the default,
    /// matching `NodeConfig::from_env`.
    pub fn node_config(&self) -> NodeConfig {
        let url = match self.rpc_url.trim() {
            "" => DEFAULT_RPC_URL,
            url => url,
        };
        NodeConfig::new(url)
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs))
    }
}
