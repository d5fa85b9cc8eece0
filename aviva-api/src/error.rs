use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use aviva_order::OrderError;

#[derive(Debug)]
pub enum AppError {
    Order(OrderError),
    NotFound(String),
    Internal(anyhow::Error),
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        Self::Order(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Order(OrderError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg),
            AppError::Order(err @ OrderError::InvalidTransition { .. }) => {
                (StatusCode::CONFLICT, err.to_string())
            }
            AppError::Order(err @ OrderError::Provider(_)) => {
                tracing::error!("Provider call failed: {}", err);
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            AppError::Order(err) => {
                // NoProviders / ProviderUnregistered / Store
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
