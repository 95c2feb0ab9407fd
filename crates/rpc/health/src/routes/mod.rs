use actix_web::web::ServiceConfig;

use crate::handlers::{height::get_height, status::get_status};

/// Registers `/status` and `/height`.
pub fn register_routers(config: &mut ServiceConfig) {
    config.service(get_status).service(get_height);
}
