use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors raised while loading the catalog from its CSV resource.
///
/// All of these are fatal at startup: the process must not serve queries
/// over a catalog that failed to load.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read catalog resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog resource is empty (missing header row)")]
    MissingHeader,

    #[error("unexpected header {found:?}, expected {expected:?}")]
    BadHeader { expected: String, found: String },

    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },

    #[error("line {line}: score {value:?} is not a number")]
    BadScore { line: usize, value: String },
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Catalog load error: {0}")]
    Load(#[from] LoadError),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidQuery(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Load(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
