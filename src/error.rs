use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Missing, invalid, or expired session token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// Login rejected
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    /// An analysis is already running for this session
    #[error("Analysis in progress: {0}")]
    AnalysisInProgress(String),
    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::ConfigError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            Self::InvalidCredentials(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            Self::AnalysisInProgress(msg) => (StatusCode::CONFLICT, msg.clone()),
            Self::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::ConfigError(_) => "config_error",
        AppError::Unauthorized(_) => "unauthorized",
        AppError::InvalidCredentials(_) => "invalid_credentials",
        AppError::AnalysisInProgress(_) => "analysis_in_progress",
        AppError::InternalError(_) => "internal_error",
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::InternalError(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::Unauthorized("session expired".to_string());
        assert_eq!(error.to_string(), "Unauthorized: session expired");
    }

    #[test]
    fn test_error_type_name() {
        assert_eq!(
            error_type_name(&AppError::Unauthorized("test".to_string())),
            "unauthorized"
        );
        assert_eq!(
            error_type_name(&AppError::AnalysisInProgress("test".to_string())),
            "analysis_in_progress"
        );
    }

    #[tokio::test]
    async fn test_error_response_status() {
        let response = AppError::InvalidCredentials("bad password".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = AppError::AnalysisInProgress("busy".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
