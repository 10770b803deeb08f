use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("job {0} not found")]
    JobNotFound(i32),

    #[error("note {0} not found")]
    NoteNotFound(i32),

    #[error("{0}")]
    Validation(String),

    #[error("improperly configured: {0}")]
    Configuration(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::JobNotFound(_) | Error::NoteNotFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", &self);
            return (status, Json(json!({"detail": "internal server error"}))).into_response();
        }
        (status, Json(json!({"detail": self.to_string()}))).into_response()
    }
}
