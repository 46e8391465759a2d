use serde::de::DeserializeOwned;

use crate::error::{CoreError, RpcError};

/// Decode an integer result that dev nodes encode either as a JSON number
/// (Ganache) or as a hex quantity string (Anvil, Hardhat).
pub(super) fn parse_quantity_i64(value: &serde_json::Value, method: &str) -> Result<i64, CoreError> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    if let Some(n) = value.as_u64() {
        return i64::try_from(n).map_err(|_| out_of_range(method, value));
    }
    if let Some(s) = value.as_str() {
        if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            let n = u64::from_str_radix(digits, 16).map_err(|e| {
                RpcError::InvalidResponse(format!("{method} returned invalid hex quantity `{s}`: {e}"))
            })?;
            return i64::try_from(n).map_err(|_| out_of_range(method, value));
        }
        return s.parse::<i64>().map_err(|e| {
            RpcError::InvalidResponse(format!("{method} returned non-integer `{s}`: {e}")).into()
        });
    }
    Err(RpcError::InvalidResponse(format!("{method} returned non-integer result: {value}")).into())
}

/// Decode a result of a fixed JSON type (`String`, `bool`).
pub(super) fn parse_typed<T: DeserializeOwned>(
    value: serde_json::Value,
    method: &str,
) -> Result<T, CoreError> {
    serde_json::from_value(value.clone()).map_err(|e| {
        RpcError::InvalidResponse(format!("invalid {method} result {value}: {e}")).into()
    })
}

fn out_of_range(method: &str, value: &serde_json::Value) -> CoreError {
    RpcError::InvalidResponse(format!("{method} result out of i64 range: {value}")).into()
}
