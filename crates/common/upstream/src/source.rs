use async_trait::async_trait;
use syncwatch_sync_status::SyncSnapshot;
use tracing::info;

use crate::{
    beacon::BeaconNodeClient, config::UpstreamConfig, error::FetchError,
    execution::ExecutionRpcClient, explorer::BeaconExplorerClient,
};

/// The four progress readings a health check needs.
#[async_trait]
pub trait SyncSource: Send + Sync {
    async fn local_block_height(&self) -> Result<u64, FetchError>;

    async fn remote_block_height(&self) -> Result<u64, FetchError>;

    async fn local_beacon_slot(&self) -> Result<u64, FetchError>;

    async fn remote_beacon_slot(&self, api_key: &str) -> Result<u64, FetchError>;

    /// Reads all four values one after another. The first failure is returned and the
    /// remaining reads are skipped.
    async fn snapshot(&self, api_key: &str) -> Result<SyncSnapshot, FetchError> {
        let local_block = self.local_block_height().await?;
        let remote_block = self.remote_block_height().await?;
        let local_slot = self.local_beacon_slot().await?;
        let remote_slot = self.remote_beacon_slot(api_key).await?;

        Ok(SyncSnapshot {
            local_block,
            remote_block,
            local_slot,
            remote_slot,
        })
    }
}

/// [`SyncSource`] backed by the local nodes, a public JSON-RPC relay and a block explorer.
#[derive(Debug, Clone)]
pub struct UpstreamSyncSource {
    local_execution: ExecutionRpcClient,
    public_execution: ExecutionRpcClient,
    local_beacon: BeaconNodeClient,
    explorer: BeaconExplorerClient,
}

impl UpstreamSyncSource {
    pub fn new(config: UpstreamConfig) -> Result<Self, FetchError> {
        let UpstreamConfig {
            execution_endpoint,
            public_execution_endpoint,
            beacon_endpoint,
            explorer_endpoint,
            request_timeout,
        } = config;

        info!(
            "Upstreams: execution={execution_endpoint}, public_execution={public_execution_endpoint}, beacon={beacon_endpoint}, explorer={explorer_endpoint}, timeout={request_timeout:?}"
        );

        Ok(Self {
            local_execution: ExecutionRpcClient::new(execution_endpoint, request_timeout)?,
            public_execution: ExecutionRpcClient::new(public_execution_endpoint, request_timeout)?,
            local_beacon: BeaconNodeClient::new(beacon_endpoint, request_timeout)?,
            explorer: BeaconExplorerClient::new(explorer_endpoint, request_timeout)?,
        })
    }
}

#[async_trait]
impl SyncSource for UpstreamSyncSource {
    async fn local_block_height(&self) -> Result<u64, FetchError> {
        self.local_execution.block_height().await
    }

    async fn remote_block_height(&self) -> Result<u64, FetchError> {
        self.public_execution.block_height().await
    }

    async fn local_beacon_slot(&self) -> Result<u64, FetchError> {
        self.local_beacon.finalized_slot().await
    }

    async fn remote_beacon_slot(&self, api_key: &str) -> Result<u64, FetchError> {
        self.explorer.latest_slot(api_key).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use syncwatch_sync_status::SyncSnapshot;
    use url::Url;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    use super::{SyncSource, UpstreamSyncSource};
    use crate::{config::UpstreamConfig, error::FetchError};

    async fn mount_execution(mock_server: &MockServer, route: &str, result: &str) {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": result
            })))
            .mount(mock_server)
            .await;
    }

    fn config(mock_server: &MockServer) -> UpstreamConfig {
        let url = |route: &str| Url::parse(&format!("{}{route}", mock_server.uri())).unwrap();
        UpstreamConfig {
            execution_endpoint: url("/local"),
            public_execution_endpoint: url("/public"),
            beacon_endpoint: url("/eth/v1/beacon/headers/finalized"),
            explorer_endpoint: url("/api/v1/slot/latest"),
            request_timeout: Duration::from_millis(500),
        }
    }

    #[tokio::test]
    async fn test_snapshot_reads_every_upstream() {
        let mock_server = MockServer::start().await;
        mount_execution(&mock_server, "/local", "0x6c6b2d").await;
        mount_execution(&mock_server, "/public", "0x6c6b2e").await;
        Mock::given(method("GET"))
            .and(path("/eth/v1/beacon/headers/finalized"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "header": { "message": { "slot": "123456" } } }
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/slot/latest"))
            .and(query_param("apiKey", "key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "slot": 123457 }
            })))
            .mount(&mock_server)
            .await;

        let source = UpstreamSyncSource::new(config(&mock_server)).unwrap();
        assert_eq!(
            source.snapshot("key").await.unwrap(),
            SyncSnapshot {
                local_block: 7105325,
                remote_block: 7105326,
                local_slot: 123456,
                remote_slot: 123457,
            }
        );
    }

    #[tokio::test]
    async fn test_snapshot_stops_at_first_failure() {
        let mock_server = MockServer::start().await;
        mount_execution(&mock_server, "/local", "0x6c6b2d").await;
        Mock::given(method("POST"))
            .and(path("/public"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let source = UpstreamSyncSource::new(config(&mock_server)).unwrap();
        let err = source.snapshot("key").await.unwrap_err();
        assert!(matches!(err, FetchError::Status { .. }), "{err}");
        mock_server.verify().await;
    }
}
