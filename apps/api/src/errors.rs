use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Outward classification of every failure the service reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field is missing or malformed. No network call was made.
    Validation,
    /// SMTP credentials were rejected.
    Unauthorized,
    /// The SMTP server or the LinkedIn API refused the request.
    Upstream,
    /// Anything unanticipated.
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Upstream => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`,
/// always rendering the `{"success": false, "error": ...}` envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    /// `error` is either a plain string or the provider's structured error body.
    #[error("Upstream error: {error}")]
    Upstream {
        error: Value,
        status_code: Option<u16>,
    },

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn upstream(message: impl Into<String>) -> Self {
        AppError::Upstream {
            error: Value::String(message.into()),
            status_code: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Unauthorized(_) => ErrorKind::Unauthorized,
            AppError::Upstream { .. } => ErrorKind::Upstream,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::Validation(format!("Invalid multipart form: {}", err.body_text()))
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.kind().status();

        let body = match self {
            AppError::Validation(msg) | AppError::Unauthorized(msg) => json!({
                "success": false,
                "error": msg,
            }),
            AppError::Upstream {
                error,
                status_code: Some(code),
            } => json!({
                "success": false,
                "error": error,
                "status_code": code,
            }),
            AppError::Upstream {
                error,
                status_code: None,
            } => json!({
                "success": false,
                "error": error,
            }),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                json!({
                    "success": false,
                    "error": e.to_string(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn envelope(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_renders_400_envelope() {
        let (status, body) = envelope(AppError::Validation("Missing jobData".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "error": "Missing jobData"}));
    }

    #[tokio::test]
    async fn test_upstream_carries_provider_status() {
        let err = AppError::Upstream {
            error: json!({"message": "token expired"}),
            status_code: Some(401),
        };
        let (status, body) = envelope(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["status_code"], 401);
        assert_eq!(body["error"]["message"], "token expired");
    }

    #[tokio::test]
    async fn test_upstream_without_status_omits_field() {
        let (status, body) = envelope(AppError::upstream("SMTP Error: 554 rejected")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.get("status_code").is_none());
        assert_eq!(body["error"], "SMTP Error: 554 rejected");
    }

    #[tokio::test]
    async fn test_internal_stringifies_message() {
        let (status, body) = envelope(AppError::Internal(anyhow::anyhow!("boom"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "boom");
        assert_eq!(body["success"], false);
    }

    #[test]
    fn test_kind_status_mapping() {
        assert_eq!(ErrorKind::Validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorKind::Upstream.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ErrorKind::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
