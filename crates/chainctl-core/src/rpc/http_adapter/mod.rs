//! JSON-RPC client for EVM test chain nodes.
//!
//! Implements [`TestChainRpc`](super::TestChainRpc) over JSON-RPC 2.0 using
//! `reqwest`, with endpoint validation, explicit connect/request timeouts
//! and structured decoding of node-side errors.

mod client;
mod connection;
mod parsing;
mod protocol;

pub use client::HttpRpcClient;
