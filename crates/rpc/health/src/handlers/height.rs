use std::sync::Arc;

use actix_web::{HttpResponse, Responder, get, web::Data};
use syncwatch_api_types::{error::ApiError, responses::HeightResponse};
use syncwatch_upstream::source::SyncSource;
use tracing::error;

/// Called by `/height` to get the block height of the local execution node.
#[get("/height")]
pub async fn get_height(
    sync_source: Data<Arc<dyn SyncSource>>,
) -> Result<impl Responder, ApiError> {
    let height = sync_source.local_block_height().await.map_err(|err| {
        error!("Error in /height: {err}");
        ApiError::Upstream(err.to_string())
    })?;

    Ok(HttpResponse::Ok().json(HeightResponse::new(height)))
}
