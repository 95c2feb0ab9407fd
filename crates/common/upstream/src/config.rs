use std::time::Duration;

use url::Url;

/// Where the four progress values are read from.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// JSON-RPC endpoint of the local execution node.
    pub execution_endpoint: Url,
    /// JSON-RPC endpoint of a public relay for the same network.
    pub public_execution_endpoint: Url,
    /// Finalized header endpoint of the local beacon node.
    pub beacon_endpoint: Url,
    /// Latest slot endpoint of the block explorer.
    pub explorer_endpoint: Url,
    pub request_timeout: Duration,
}
