use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Responder, get, http::StatusCode, web::Data};
use syncwatch_api_types::{error::ApiError, query::StatusQuery, responses::StatusResponse};
use syncwatch_upstream::source::SyncSource;
use tracing::{debug, error};

use crate::config::HealthCheckConfig;

/// Called by `/status` to compare the local nodes against the canonical chain.
///
/// Responds 200 when healthy and 500 when unhealthy, so uptime monitors can rely on the status
/// code alone.
///
/// Query parameters:
/// - `api_key`: block explorer API key, required; the first one wins when repeated
#[get("/status")]
pub async fn get_status(
    request: HttpRequest,
    sync_source: Data<Arc<dyn SyncSource>>,
    health_config: Data<HealthCheckConfig>,
) -> Result<impl Responder, ApiError> {
    let query = StatusQuery::from_query(request.query_string())?;
    let api_key = query.api_key().ok_or(ApiError::MissingApiKey)?;

    let snapshot = sync_source.snapshot(api_key).await.map_err(|err| {
        error!("Error in /status: {err}");
        ApiError::Upstream(err.to_string())
    })?;

    let status = snapshot.evaluate(health_config.sync_threshold);
    debug!(
        "Sync status {status}: block distance {}, slot distance {}",
        snapshot.block_distance(),
        snapshot.slot_distance()
    );

    let status_code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    Ok(HttpResponse::build(status_code).json(StatusResponse::new(status)))
}
