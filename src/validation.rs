use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{AppError, AppResult};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Trimmed copy of `value`, or a validation error naming `field`.
pub(crate) fn non_empty(field: &str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn non_negative(field: &str, value: Option<f64>) -> AppResult<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(AppError::validation(format!(
            "{field} must be a non-negative number"
        ))),
        other => Ok(other),
    }
}

/// Largest value a NUMERIC(5,2) column accepts after rounding.
pub(crate) const MAX_BODY_MEASURE: f64 = 999.99;
/// Largest value a NUMERIC(6,2) column accepts after rounding.
pub(crate) const MAX_LIFT_KG: f64 = 9_999.99;

/// Like [`non_negative`], also capped at `max`.
pub(crate) fn measurement(field: &str, value: Option<f64>, max: f64) -> AppResult<Option<f64>> {
    match non_negative(field, value)? {
        Some(v) if v > max => Err(AppError::validation(format!(
            "{field} must not exceed {max}"
        ))),
        other => Ok(other),
    }
}
