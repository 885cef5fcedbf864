use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handlers::config;
use crate::ApiState;

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/config",
        get(config::get_config).post(config::update_config),
    )
}
