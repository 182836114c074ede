use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use coleta_core::error::CoreError;
use coleta_core::registration::FieldViolation;
use serde_json::json;

/// Error type shared by every handler.
///
/// Each variant knows how to render itself as a JSON error body, so
/// handlers bubble failures with `?` and the response shape stays
/// uniform across routes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain failure raised below the HTTP layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Driver or query failure from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A rejected registration with the full list of field violations.
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// Malformed input that never reached validation.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Anything the caller cannot act on.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Shorthand for handler return types.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // The only variant with structure beyond { error, code }:
            // it carries a details array, one entry per field.
            AppError::Validation(violations) => {
                let body = json!({
                    "error": "Validation failed",
                    "code": "VALIDATION_ERROR",
                    "details": violations,
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }

            AppError::Core(CoreError::NotFound { entity, id }) => envelope(
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                envelope(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            AppError::Core(CoreError::Conflict(msg)) => {
                envelope(StatusCode::CONFLICT, "CONFLICT", msg)
            }
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                internal()
            }

            AppError::Database(err) => database_response(err),

            AppError::BadRequest(msg) => envelope(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

/// Render the flat `{ error, code }` envelope.
fn envelope(status: StatusCode, code: &str, message: String) -> Response {
    let body = json!({
        "error": message,
        "code": code,
    });
    (status, axum::Json(body)).into_response()
}

/// The sanitized 500 that everything unexpected collapses into.
fn internal() -> Response {
    envelope(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Map a sqlx failure onto the error taxonomy.
///
/// A row miss is a 404. A unique violation on a `uq_` constraint is a
/// 409. Anything else is logged and sanitized to a 500.
fn database_response(err: sqlx::Error) -> Response {
    match err {
        sqlx::Error::RowNotFound => envelope(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // 23505 is PostgreSQL's unique_violation SQLSTATE.
            let constraint = db_err.constraint().unwrap_or("unknown");
            if db_err.code().as_deref() == Some("23505") && constraint.starts_with("uq_") {
                return envelope(
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
