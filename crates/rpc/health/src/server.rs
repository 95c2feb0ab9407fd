use std::{io::Result, sync::Arc};

use syncwatch_rpc_common::{config::RpcServerConfig, server::RpcServerBuilder};
use syncwatch_upstream::source::SyncSource;

use crate::{config::HealthCheckConfig, routes::register_routers};

/// Start the health check API server.
pub async fn start(
    server_config: RpcServerConfig,
    health_config: HealthCheckConfig,
    sync_source: Arc<dyn SyncSource>,
) -> Result<()> {
    RpcServerBuilder::new(server_config.http_socket_address)
        .with_data(health_config)
        .with_data(sync_source)
        .configure(register_routers)
        .start()
        .await
}
