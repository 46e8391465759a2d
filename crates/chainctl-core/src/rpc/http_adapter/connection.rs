use std::net::IpAddr;

use reqwest::Url;

use crate::error::{ConnectionError, CoreError, RpcError};

pub(super) fn parse_connection(connection: &str) -> Result<Url, ConnectionError> {
    let parsed = Url::parse(connection).map_err(|e| ConnectionError::InvalidEndpoint {
        endpoint: connection.to_owned(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ConnectionError::UnsupportedScheme(other.to_owned())),
    }
}

/// Dev nodes almost always listen on loopback; such endpoints must not be
/// routed through an `HTTP_PROXY` picked up from the environment.
pub(super) fn is_loopback(url: &Url) -> bool {
    match url.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .map(|ip| ip.is_loopback())
            .unwrap_or(false),
        None => false,
    }
}

/// Split transport failures into "never reached the node" and "failed
/// mid-call". Only the former is a connection error.
pub(super) fn classify_transport_error(endpoint: &Url, err: reqwest::Error) -> CoreError {
    if err.is_connect() {
        ConnectionError::Unreachable {
            endpoint: endpoint.to_string(),
            source: err,
        }
        .into()
    } else {
        RpcError::Transport(err).into()
    }
}
