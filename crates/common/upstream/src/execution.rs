use std::time::Duration;

use serde_json::Value;
use tracing::error;
use url::Url;

use crate::{
    error::FetchError,
    http_client::EndpointClient,
    json::{JsonRpcRequest, JsonRpcResponse, parse_hex_quantity},
};

pub const ETH_BLOCK_NUMBER: &str = "eth_blockNumber";

/// Reads the chain head from an execution-layer JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct ExecutionRpcClient {
    http_client: EndpointClient,
}

impl ExecutionRpcClient {
    pub fn new(endpoint: Url, request_timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            http_client: EndpointClient::new(endpoint, request_timeout)?,
        })
    }

    pub async fn block_height(&self) -> Result<u64, FetchError> {
        self.eth_block_number().await.inspect_err(|err| {
            error!(
                "Error fetching block height from {}: {err}",
                self.http_client.endpoint()
            )
        })
    }

    async fn eth_block_number(&self) -> Result<u64, FetchError> {
        let endpoint = self.http_client.endpoint();
        let request = self
            .http_client
            .post()
            .json(&JsonRpcRequest::new(ETH_BLOCK_NUMBER));
        let body = self.http_client.send_json(request).await?;

        let response = serde_json::from_value::<JsonRpcResponse>(body).map_err(|err| {
            FetchError::malformed(endpoint, format!("not a JSON-RPC response: {err}"))
        })?;

        if let Some(rpc_error) = response.error {
            return Err(FetchError::Rpc {
                endpoint: endpoint.to_string(),
                code: rpc_error.code,
                message: rpc_error.message,
            });
        }

        match response.result {
            Some(Value::String(block_hex)) if !block_hex.is_empty() => {
                parse_hex_quantity(&block_hex).map_err(|err| {
                    FetchError::decode(endpoint, "result", format!("{block_hex:?}"), err)
                })
            }
            Some(Value::Null) | Some(Value::String(_)) | None => {
                Err(FetchError::malformed(endpoint, "'result' field missing"))
            }
            Some(other) => Err(FetchError::decode(
                endpoint,
                "result",
                other,
                "expected a hex string",
            )),
        }
    }
}
