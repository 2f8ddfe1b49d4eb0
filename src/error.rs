use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Failure returned by every persistence operation and handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// SQLSTATE for a value too large for its NUMERIC/INTEGER column.
const NUMERIC_OUT_OF_RANGE: &str = "22003";

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Translate constraint violations into caller-facing errors. `conflict`
    /// is the message for a unique violation on tables that have a unique key;
    /// `missing` names the referenced row a foreign key violation points at.
    pub fn from_write(e: sqlx::Error, conflict: Option<&str>, missing: &'static str) -> Self {
        if let Some(db) = e.as_database_error() {
            if let (true, Some(conflict)) = (db.is_unique_violation(), conflict) {
                return Self::Conflict(conflict.to_string());
            }
            if db.is_foreign_key_violation() {
                return Self::NotFound(missing);
            }
            if db.is_check_violation() {
                return Self::Validation(db.message().to_string());
            }
            if db.code().as_deref() == Some(NUMERIC_OUT_OF_RANGE) {
                return Self::Validation("value out of range".into());
            }
        }
        Self::Database(e)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Log a failed statement at the operation boundary and wrap it.
pub(crate) fn query_failed(op: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        error!(error = %e, op, "query failed");
        AppError::Database(e)
    }
}

/// Log a failed write to a table with a unique key and classify constraint
/// violations.
pub(crate) fn write_failed(
    op: &'static str,
    conflict: &'static str,
    missing: &'static str,
) -> impl FnOnce(sqlx::Error) -> AppError {
    classify_write(op, Some(conflict), missing)
}

/// Same as [`write_failed`] for tables keyed only by a serial id.
pub(crate) fn insert_failed(
    op: &'static str,
    missing: &'static str,
) -> impl FnOnce(sqlx::Error) -> AppError {
    classify_write(op, None, missing)
}

fn classify_write(
    op: &'static str,
    conflict: Option<&'static str>,
    missing: &'static str,
) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        let err = AppError::from_write(e, conflict, missing);
        match &err {
            AppError::Database(inner) => error!(error = %inner, op, "write failed"),
            other => warn!(error = %other, op, "write rejected"),
        }
        err
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            // don't leak driver detail to the page
            AppError::Database(_) => "internal database error".to_string(),
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
