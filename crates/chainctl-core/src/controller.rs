use async_trait::async_trait;
use tracing::debug;

use crate::config::NodeConfig;
use crate::error::CoreError;
use crate::rpc::{HttpRpcClient, TestChainRpc};

/// Drives a local test chain node through its `evm_*` RPC methods.
///
/// Holds no connection state: each operation dials the configured endpoint,
/// issues a single call and drops the connection on return. Concurrent
/// operations are independent and unordered.
#[derive(Debug, Clone, Default)]
pub struct TestChainController {
    config: NodeConfig,
}

impl TestChainController {
    pub fn new(config: NodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    fn dial(&self) -> Result<HttpRpcClient, CoreError> {
        let client = HttpRpcClient::connect(&self.config)?;
        debug!(endpoint = client.url(), "dialed test chain node");
        Ok(client)
    }
}

#[async_trait]
impl TestChainRpc for TestChainController {
    async fn advance_time(&self, seconds: i64) -> Result<i64, CoreError> {
        self.dial()?.advance_time(seconds).await
    }

    async fn mine_block(&self, timestamp: i64) -> Result<String, CoreError> {
        self.dial()?.mine_block(timestamp).await
    }

    async fn revert(&self, snapshot_id: &str) -> Result<bool, CoreError> {
        self.dial()?.revert(snapshot_id).await
    }

    async fn snapshot(&self) -> Result<String, CoreError> {
        self.dial()?.snapshot().await
    }
}
