use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum TodoError {
    #[error("todo title cannot be empty")]
    EmptyTitle,

    #[error("todo {0} not found")]
    NotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for TodoError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            TodoError::EmptyTitle => {
                let body = ApiErrorBody {
                    code: "EMPTY_TITLE".to_string(),
                    message: "Todo title cannot be empty.".to_string(),
                };
                (StatusCode::BAD_REQUEST, body)
            }
            TodoError::NotFound(id) => {
                let body = ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: format!("Todo {id} does not exist."),
                };
                (StatusCode::NOT_FOUND, body)
            }
            TodoError::Database(SqlxError::RowNotFound) => {
                let body = ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: "Todo does not exist.".to_string(),
                };
                (StatusCode::NOT_FOUND, body)
            }
            TodoError::Database(e) => {
                error!(error = %e, "store failure");
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
