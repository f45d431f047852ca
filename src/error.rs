use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Request-level failures. Every error path funnels through the single
/// `IntoResponse` impl below, which logs the root cause and picks the HTTP
/// status and JSON body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("upstream fetch failed: {0}")]
    Fetch(String),

    #[error("upstream API returned status {status}")]
    Upstream { status: u16 },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(vec![message.into()])
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            Self::Validation(errors) => {
                tracing::error!("Validation errors: {:?}", errors);
                (StatusCode::BAD_REQUEST, errors)
            }
            Self::Fetch(cause) => {
                tracing::error!("Fetch error: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Failed to fetch commits from upstream API".to_string()],
                )
            }
            Self::Upstream { status } => {
                tracing::error!("Upstream API returned status {}", status);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Upstream API request was not successful".to_string()],
                )
            }
            Self::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Internal server error".to_string()],
                )
            }
        };
        (status, Json(ErrorBody {
            success: false,
            errors,
        }))
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let response = AppError::validation("Repository URL is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn fetch_and_upstream_map_to_500() {
        let response = AppError::Fetch("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::Upstream { status: 403 }.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
