//! Test chain RPC abstraction layer.
//!
//! Defines the [`TestChainRpc`] trait and provides an HTTP JSON-RPC
//! implementation ([`HttpRpcClient`]) holding a single connection.

mod http_adapter;

pub use http_adapter::HttpRpcClient;

use async_trait::async_trait;

use crate::error::CoreError;

pub const EVM_INCREASE_TIME: &str = "evm_increaseTime";
pub const EVM_MINE: &str = "evm_mine";
pub const EVM_REVERT: &str = "evm_revert";
pub const EVM_SNAPSHOT: &str = "evm_snapshot";

/// The development-only RPC methods shared by Ganache, Hardhat and Anvil.
///
/// Every method maps to exactly one remote call. Errors are never retried.
#[async_trait]
pub trait TestChainRpc: Send + Sync {
    /// Jump forward (or backward) in time by `seconds`.
    /// Returns the node's total time adjustment, in seconds.
    async fn advance_time(&self, seconds: i64) -> Result<i64, CoreError>;

    /// Force a block to be mined. A `timestamp > 0` is sent as the block's
    /// mining time; zero or negative means "let the node pick".
    async fn mine_block(&self, timestamp: i64) -> Result<String, CoreError>;

    /// Revert chain state to the snapshot `snapshot_id`. An empty id is sent
    /// as-is; some nodes read it as "latest snapshot".
    async fn revert(&self, snapshot_id: &str) -> Result<bool, CoreError>;

    /// Snapshot chain state at the current block and return the snapshot id.
    async fn snapshot(&self) -> Result<String, CoreError>;
}
