//! Attendance records.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in `attendance_records`. Status is one of Present, Absent, Late,
/// Half Day.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttendanceRecord {
    pub id: i32,
    pub employee_id: String,
    pub employee_name: String,
    pub date: NaiveDate,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub working_hours: Option<String>,
    pub status: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}
