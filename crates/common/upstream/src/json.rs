use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::FetchError;

pub fn strip_prefix(string: &str) -> &str {
    if let Some(stripped) = string.strip_prefix("0x") {
        stripped
    } else {
        string
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub id: i32,
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<Value>,
}

impl JsonRpcRequest {
    pub fn new(method: &str) -> Self {
        Self {
            id: 1,
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params: vec![],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// `result` and `error` are both optional so that a response carrying neither is reported as
/// malformed rather than failing to deserialize.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// Parses a JSON-RPC quantity such as `"0x6c6b2d"`.
pub fn parse_hex_quantity(quantity: &str) -> Result<u64, std::num::ParseIntError> {
    u64::from_str_radix(strip_prefix(quantity), 16)
}

/// Follows `path` from `body`, failing on the first absent or null field.
pub fn field_at<'a>(
    endpoint: &Url,
    body: &'a Value,
    path: &[&str],
) -> Result<&'a Value, FetchError> {
    let mut value = body;
    for field in path {
        value = match value.get(field) {
            Some(Value::Null) | None => {
                return Err(FetchError::malformed(
                    endpoint,
                    format!("'{field}' field missing"),
                ));
            }
            Some(value) => value,
        };
    }
    Ok(value)
}

/// Reads the slot found at `path`. Beacon APIs quote integers, so both decimal strings and
/// plain numbers are accepted. Slot 0 is a valid slot.
pub fn slot_at(endpoint: &Url, body: &Value, path: &[&str]) -> Result<u64, FetchError> {
    match field_at(endpoint, body, path)? {
        Value::String(slot) if slot.is_empty() => {
            Err(FetchError::malformed(endpoint, "'slot' field missing"))
        }
        Value::String(slot) => slot
            .parse::<u64>()
            .map_err(|err| FetchError::decode(endpoint, "slot", format!("{slot:?}"), err)),
        Value::Number(slot) => slot.as_u64().ok_or_else(|| {
            FetchError::decode(endpoint, "slot", slot, "not a non-negative integer")
        }),
        other => Err(FetchError::decode(
            endpoint,
            "slot",
            other,
            "expected a decimal string or number",
        )),
    }
}
