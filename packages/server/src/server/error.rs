use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::any::Any;
use thiserror::Error;

use crate::config::Environment;

/// An unexpected failure inside a handler.
///
/// Rendered as a 500 whose body carries the detail message only in
/// development; production callers get a generic message. Always logged
/// server-side.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ServerFault {
    environment: Environment,
    message: String,
}

impl ServerFault {
    pub fn new(environment: Environment, error: anyhow::Error) -> Self {
        Self {
            environment,
            message: format!("{error:#}"),
        }
    }

    /// Build a fault from a caught panic payload.
    pub fn from_panic(environment: Environment, payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else {
            "handler panicked".to_string()
        };
        Self {
            environment,
            message,
        }
    }
}

impl IntoResponse for ServerFault {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.message, "Request handler failed");

        let message = if self.environment.is_development() {
            self.message
        } else {
            "Something went wrong".to_string()
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error",
                "message": message,
            })),
        )
            .into_response()
    }
}
