use std::time::Duration;

use tracing::error;
use url::Url;

use crate::{error::FetchError, http_client::EndpointClient, json::slot_at};

pub const API_KEY_QUERY_PARAM: &str = "apiKey";
pub const LATEST_SLOT_PATH: [&str; 2] = ["data", "slot"];

/// Reads the latest slot from a public block explorer that authenticates by API key.
#[derive(Debug, Clone)]
pub struct BeaconExplorerClient {
    http_client: EndpointClient,
}

impl BeaconExplorerClient {
    pub fn new(endpoint: Url, request_timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            http_client: EndpointClient::new(endpoint, request_timeout)?,
        })
    }

    pub async fn latest_slot(&self, api_key: &str) -> Result<u64, FetchError> {
        self.latest_slot_with_params(&[(API_KEY_QUERY_PARAM, api_key)])
            .await
    }

    /// Queries the explorer with arbitrary query parameters, which must include the API key.
    pub async fn latest_slot_with_params(
        &self,
        query_params: &[(&str, &str)],
    ) -> Result<u64, FetchError> {
        let endpoint = self.http_client.endpoint();
        let request = self.http_client.get().query(query_params);
        let body = self.http_client.send_json(request).await.inspect_err(|err| {
            if err.is_request_error() {
                error!("Request error from {endpoint}: {err}");
            } else {
                error!("Unexpected error from {endpoint}: {err}");
            }
        })?;

        slot_at(endpoint, &body, &LATEST_SLOT_PATH)
            .inspect_err(|err| error!("Value error from {endpoint}: {err}"))
    }
}
