use serde::Serialize;
use sqlx::FromRow;
use time::Date;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Goal {
    pub goal_id: i32,
    pub goal_description: String,
    pub target_value: Option<f64>,
    #[serde(with = "crate::calendar::iso_date")]
    pub start_date: Date,
    #[serde(with = "crate::calendar::iso_date")]
    pub end_date: Date,
    pub status: Option<String>,
}
