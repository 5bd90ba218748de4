//! Leave applications.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in `leave_applications`. Status is Pending, Approved or Rejected.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeaveApplication {
    pub id: i32,
    pub employee_id: String,
    pub employee_name: String,
    pub leave_type: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub total_days: i32,
    pub reason: String,
    pub status: String,
    pub applied_date: NaiveDate,
    pub approved_by: Option<String>,
    pub approved_date: Option<NaiveDate>,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for filing a leave application.
#[derive(Debug, Clone)]
pub struct CreateLeaveApplication {
    pub employee_id: String,
    pub employee_name: String,
    pub leave_type: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub total_days: i32,
    pub reason: String,
}
