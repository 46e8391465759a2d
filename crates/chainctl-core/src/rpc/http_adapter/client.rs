use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use reqwest::{header, Url};
use tracing::{debug, trace};

use crate::config::NodeConfig;
use crate::error::{ConnectionError, CoreError, RpcError};

use super::super::{TestChainRpc, EVM_INCREASE_TIME, EVM_MINE, EVM_REVERT, EVM_SNAPSHOT};
use super::connection::{classify_transport_error, is_loopback, parse_connection};
use super::parsing::{parse_quantity_i64, parse_typed};
use super::protocol::{parse_jsonrpc_error, JsonRpcRequest, JsonRpcResponse};

/// Responses are never matched back to requests by id (one call per HTTP
/// exchange), so ids only need to be distinct per connection. Small values
/// stay exact in JavaScript nodes, which hold ids as doubles.
const FIRST_REQUEST_ID: u64 = 1;

/// JSON-RPC client over HTTP(S) for one test chain node.
///
/// Holding on to a client reuses its keep-alive connection across calls;
/// [`TestChainController`](crate::TestChainController) instead connects
/// afresh for every operation.
pub struct HttpRpcClient {
    client: reqwest::Client,
    url: Url,
    next_id: AtomicU64,
}

impl HttpRpcClient {
    /// Validate the endpoint and prepare an HTTP client with the configured
    /// timeouts. Nothing is sent to the node until the first call.
    pub fn connect(config: &NodeConfig) -> Result<Self, CoreError> {
        let url = parse_connection(&config.url)?;

        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .tcp_nodelay(true);
        if is_loopback(&url) {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(ConnectionError::Client)?;

        Ok(Self {
            client,
            url,
            next_id: AtomicU64::new(FIRST_REQUEST_ID),
        })
    }

    /// The validated endpoint, as normalized by URL parsing.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    fn reserve_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn rpc_call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, CoreError> {
        let id = self.reserve_request_id();
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.params = params.len(),
            "rpc call"
        );
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        let response = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(&req)
            .send()
            .await
            .map_err(|e| classify_transport_error(&self.url, e))?;
        let status = response.status();

        let body = response.text().await.map_err(RpcError::Transport)?;
        debug!(rpc.id = id, rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.id = id, rpc.method = method, body = %body, "rpc response body");

        let decoded: JsonRpcResponse = serde_json::from_str(&body).map_err(|e| {
            RpcError::InvalidResponse(format!(
                "decode JSON-RPC response (HTTP {status}): {e}; body={body}"
            ))
        })?;

        if let Some(err) = decoded.error {
            return Err(parse_jsonrpc_error(err));
        }

        Ok(decoded.result.unwrap_or(serde_json::Value::Null))
    }
}

#[async_trait]
impl TestChainRpc for HttpRpcClient {
    async fn advance_time(&self, seconds: i64) -> Result<i64, CoreError> {
        let raw = self
            .rpc_call(EVM_INCREASE_TIME, vec![serde_json::json!(seconds)])
            .await?;
        parse_quantity_i64(&raw, EVM_INCREASE_TIME)
    }

    async fn mine_block(&self, timestamp: i64) -> Result<String, CoreError> {
        let params = match requested_timestamp(timestamp) {
            Some(ts) => vec![serde_json::json!(ts)],
            None => Vec::new(),
        };
        let raw = self.rpc_call(EVM_MINE, params).await?;
        parse_typed(raw, EVM_MINE)
    }

    async fn revert(&self, snapshot_id: &str) -> Result<bool, CoreError> {
        let raw = self
            .rpc_call(EVM_REVERT, vec![serde_json::json!(snapshot_id)])
            .await?;
        parse_typed(raw, EVM_REVERT)
    }

    async fn snapshot(&self) -> Result<String, CoreError> {
        let raw = self.rpc_call(EVM_SNAPSHOT, Vec::new()).await?;
        parse_typed(raw, EVM_SNAPSHOT)
    }
}

/// Only strictly positive timestamps are forwarded to `evm_mine`.
fn requested_timestamp(timestamp: i64) -> Option<i64> {
    (timestamp > 0).then_some(timestamp)
}
