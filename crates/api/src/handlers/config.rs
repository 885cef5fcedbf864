use axum::{extract::State, Json};
use schedcast_core::errors::ScheduleError;
use schedcast_core::models::ScheduleDocument;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::{middleware::error_handling::AppError, ApiState};

/// `GET /api/config`: the full schedule document.
#[axum::debug_handler]
pub async fn get_config(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ScheduleDocument>, AppError> {
    let guard = state.manager.read().await;
    let manager = guard.as_ref().ok_or(ScheduleError::Uninitialized)?;
    Ok(Json(manager.document().clone()))
}

/// `POST /api/config`: shallow-merge the body's top-level keys into the
/// document, persist, and return the merged result. Keys present in the
/// body replace their whole sub-tree.
#[axum::debug_handler]
pub async fn update_config(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<Value>,
) -> Result<Json<ScheduleDocument>, AppError> {
    let mut guard = state.manager.write().await;
    let manager = guard.as_mut().ok_or(ScheduleError::Uninitialized)?;
    let merged = manager.merge(body)?.clone();
    info!("configuration updated via API");
    Ok(Json(merged))
}
