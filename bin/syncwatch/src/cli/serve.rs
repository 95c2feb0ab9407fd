use std::{net::IpAddr, time::Duration};

use clap::Parser;
use syncwatch_rpc_common::config::RpcServerConfig;
use syncwatch_rpc_health::config::HealthCheckConfig;
use syncwatch_sync_status::DEFAULT_SYNC_THRESHOLD;
use syncwatch_upstream::config::UpstreamConfig;
use url::Url;

use crate::cli::constants::{
    DEFAULT_BEACON_ENDPOINT, DEFAULT_EXECUTION_ENDPOINT, DEFAULT_EXPLORER_ENDPOINT,
    DEFAULT_HTTP_ADDRESS, DEFAULT_HTTP_PORT, DEFAULT_PUBLIC_EXECUTION_ENDPOINT,
    DEFAULT_REQUEST_TIMEOUT,
};

#[derive(Debug, Clone, Parser)]
pub struct ServeConfig {
    #[arg(long, env = "SYNCWATCH_HTTP_ADDRESS", help = "Set HTTP address", default_value_t = DEFAULT_HTTP_ADDRESS)]
    pub http_address: IpAddr,

    #[arg(long, env = "SYNCWATCH_HTTP_PORT", help = "Set HTTP Port", default_value_t = DEFAULT_HTTP_PORT)]
    pub http_port: u16,

    #[arg(
        long,
        env = "SYNCWATCH_EXECUTION_ENDPOINT",
        help = "JSON-RPC endpoint of the local execution node.",
        default_value = DEFAULT_EXECUTION_ENDPOINT
    )]
    pub execution_endpoint: Url,

    #[arg(
        long,
        env = "SYNCWATCH_PUBLIC_EXECUTION_ENDPOINT",
        help = "Public JSON-RPC endpoint the local block height is compared against.",
        default_value = DEFAULT_PUBLIC_EXECUTION_ENDPOINT
    )]
    pub public_execution_endpoint: Url,

    #[arg(
        long,
        env = "SYNCWATCH_BEACON_ENDPOINT",
        help = "Finalized header endpoint of the local beacon node.",
        default_value = DEFAULT_BEACON_ENDPOINT
    )]
    pub beacon_endpoint: Url,

    #[arg(
        long,
        env = "SYNCWATCH_EXPLORER_ENDPOINT",
        help = "Block explorer endpoint returning the latest slot. Called with the `api_key` of each /status request.",
        default_value = DEFAULT_EXPLORER_ENDPOINT
    )]
    pub explorer_endpoint: Url,

    #[arg(
        long,
        env = "SYNCWATCH_REQUEST_TIMEOUT",
        help = "Timeout in seconds for every upstream request.",
        default_value_t = DEFAULT_REQUEST_TIMEOUT
    )]
    pub request_timeout: u64,

    #[arg(
        long,
        env = "SYNCWATCH_SYNC_THRESHOLD",
        help = "Largest tolerated block and slot distance before the node is reported unhealthy.",
        default_value_t = DEFAULT_SYNC_THRESHOLD
    )]
    pub sync_threshold: u64,
}

impl ServeConfig {
    pub fn rpc_server_config(&self) -> RpcServerConfig {
        RpcServerConfig::new(self.http_address, self.http_port)
    }

    pub fn health_check_config(&self) -> HealthCheckConfig {
        HealthCheckConfig {
            sync_threshold: self.sync_threshold,
        }
    }
}

impl From<ServeConfig> for UpstreamConfig {
    fn from(config: ServeConfig) -> Self {
        Self {
            execution_endpoint: config.execution_endpoint,
            public_execution_endpoint: config.public_execution_endpoint,
            beacon_endpoint: config.beacon_endpoint,
            explorer_endpoint: config.explorer_endpoint,
            request_timeout: Duration::from_secs(config.request_timeout),
        }
    }
}
