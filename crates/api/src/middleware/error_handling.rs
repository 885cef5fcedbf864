//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and `{"error": message}` JSON
//! bodies so the renderer gets a consistent error shape from every
//! endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schedcast_core::errors::ScheduleError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain [`ScheduleError`] instances and implements
/// `IntoResponse`, which lets handlers use `?` on domain results.
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            ScheduleError::TemplateNotFound(_) => StatusCode::NOT_FOUND,
            ScheduleError::MalformedDocument(_) => StatusCode::BAD_REQUEST,
            ScheduleError::SlotTimeParse(_) => StatusCode::BAD_REQUEST,
            ScheduleError::Validation(_) => StatusCode::BAD_REQUEST,
            ScheduleError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ScheduleError::Uninitialized => StatusCode::INTERNAL_SERVER_ERROR,
            ScheduleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Internal(err))
    }
}
