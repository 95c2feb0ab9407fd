use std::time::Duration;

use tracing::error;
use url::Url;

use crate::{error::FetchError, http_client::EndpointClient, json::slot_at};

/// Location of the slot in a `/eth/v1/beacon/headers/{block_id}` response.
pub const HEADER_SLOT_PATH: [&str; 4] = ["data", "header", "message", "slot"];

/// Reads the finalized slot from the local consensus-layer node.
#[derive(Debug, Clone)]
pub struct BeaconNodeClient {
    http_client: EndpointClient,
}

impl BeaconNodeClient {
    /// `endpoint` is the full header URL, e.g.
    /// `http://localhost:5052/eth/v1/beacon/headers/finalized`.
    pub fn new(endpoint: Url, request_timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            http_client: EndpointClient::new(endpoint, request_timeout)?,
        })
    }

    pub async fn finalized_slot(&self) -> Result<u64, FetchError> {
        let endpoint = self.http_client.endpoint();
        self.http_client
            .send_json(self.http_client.get())
            .await
            .and_then(|body| slot_at(endpoint, &body, &HEADER_SLOT_PATH))
            .inspect_err(|err| error!("Error fetching beacon slot from {endpoint}: {err}"))
    }
}
