use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned for server-side failures that carry no handler-specific text.
const GENERIC_FAILURE: &str = "서버 내부 오류가 발생했습니다.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every error renders as `{ "error": "<message>" }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),

    /// A server-side failure reported to the client with a handler-specific message.
    #[error("{message}: {source}")]
    Failed {
        message: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Attaches the user-facing failure message of the operation in progress.
    /// Client errors (400/404) keep their own message.
    pub fn during(self, message: &'static str) -> Self {
        match self {
            AppError::NotFound(_) | AppError::Validation(_) | AppError::Failed { .. } => self,
            other => AppError::Failed {
                message,
                source: Box::new(other),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_)
            | AppError::Llm(_)
            | AppError::Internal(_)
            | AppError::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AppError::NotFound(_) | AppError::Validation(_) => {}
            AppError::Database(e) => tracing::error!("Database error: {e}"),
            AppError::Llm(msg) => tracing::error!("LLM error: {msg}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            AppError::Failed { message, source } => {
                tracing::error!("{message} ({source})");
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!(
            "요청 본문을 읽을 수 없습니다: {}",
            rejection.body_text()
        ))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status();
        let message = match self {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg,
            AppError::Failed { message, .. } => message.to_string(),
            AppError::Database(_) | AppError::Llm(_) | AppError::Internal(_) => {
                GENERIC_FAILURE.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
