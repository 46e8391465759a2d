pub mod config;
pub mod controller;
pub mod error;
pub mod rpc;
#[cfg(test)]
pub mod test_util;

pub use config::NodeConfig;
pub use controller::TestChainController;
pub use error::{ConnectionError, CoreError, RpcError};
pub use rpc::TestChainRpc;
