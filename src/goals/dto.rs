use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::{AppError, AppResult};
use crate::validation::{non_empty, non_negative};

#[derive(Debug, Clone, Deserialize)]
pub struct SetGoalRequest {
    pub description: String,
    #[serde(default)]
    pub target_value: Option<f64>,
    #[serde(with = "crate::calendar::iso_date")]
    pub start_date: Date,
    #[serde(with = "crate::calendar::iso_date")]
    pub end_date: Date,
}

impl SetGoalRequest {
    /// Trimmed description, or the reason the form can't be saved.
    pub fn validated(self) -> AppResult<Self> {
        let description = non_empty("description", &self.description)?;
        let target_value = non_negative("target_value", self.target_value)?;
        if self.end_date < self.start_date {
            return Err(AppError::validation("end_date must not be before start_date"));
        }
        Ok(Self {
            description,
            target_value,
            ..self
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedGoalResponse {
    pub goal_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn request(start: Date, end: Date) -> SetGoalRequest {
        SetGoalRequest {
            description: "  Run 5k ".into(),
            target_value: Some(5.0),
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn trims_description() {
        let req = request(date!(2024 - 06 - 01), date!(2024 - 07 - 01))
            .validated()
            .unwrap();
        assert_eq!(req.description, "Run 5k");
    }

    #[test]
    fn same_day_range_is_allowed() {
        assert!(request(date!(2024 - 06 - 01), date!(2024 - 06 - 01))
            .validated()
            .is_ok());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = request(date!(2024 - 07 - 01), date!(2024 - 06 - 01))
            .validated()
            .unwrap_err();
        assert!(err.to_string().contains("end_date"));
    }

    #[test]
    fn parses_iso_dates() {
        let req: SetGoalRequest = serde_json::from_str(
            r#"{"description":"Swim","start_date":"2024-06-01","end_date":"2024-07-01"}"#,
        )
        .unwrap();
        assert_eq!(req.target_value, None);
        assert_eq!(req.end_date, date!(2024 - 07 - 01));
    }
}
