/// Failure to reach the node: the endpoint is unusable or nothing answers.
/// No request has been delivered when this is returned.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("invalid endpoint `{endpoint}`: expected HTTP(S) URL ({reason})")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("unsupported endpoint scheme `{0}`; expected http or https")]
    UnsupportedScheme(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("node unreachable at {endpoint}: {source}")]
    Unreachable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failure of a remote call once a connection exists.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("HTTP transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("JSON-RPC server error {code}: {message}")]
    ServerError {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("connection failure: {0}")]
    Connection(#[from] ConnectionError),

    #[error("RPC call failure: {0}")]
    Rpc(#[from] RpcError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
