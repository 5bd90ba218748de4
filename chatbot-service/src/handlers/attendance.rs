//! Attendance history endpoint.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use service_core::error::AppError;

use crate::startup::AppState;

#[derive(Debug, Deserialize)]
pub struct AttendanceHistoryQuery {
    pub employee_id: String,
    #[serde(default = "default_days")]
    pub days: i64,
}

fn default_days() -> i64 {
    30
}

#[derive(Debug, Serialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct AttendanceSummary {
    pub present_days: usize,
    pub late_days: usize,
    pub absent_days: usize,
    pub total_working_days: usize,
}

#[derive(Debug, Serialize)]
pub struct AttendanceEntry {
    pub date: NaiveDate,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub working_hours: Option<String>,
    pub status: String,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AttendanceHistoryResponse {
    pub status: &'static str,
    pub employee_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub total_records: usize,
    pub date_range: DateRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<AttendanceSummary>,
    pub records: Vec<AttendanceEntry>,
}

/// Attendance history for an employee over the last `days` days
/// (default 30), newest first. An empty window is a 200 with a message,
/// not an error.
///
/// GET /api/attendance/history?employee_id=&days=
pub async fn attendance_history(
    State(state): State<AppState>,
    Query(query): Query<AttendanceHistoryQuery>,
) -> Result<Json<AttendanceHistoryResponse>, AppError> {
    let end_date = Utc::now().date_naive();
    let start_date = end_date - Duration::days(query.days);

    let records = state
        .db
        .attendance_history(&query.employee_id, start_date, end_date)
        .await?;

    let date_range = DateRange {
        from: start_date,
        to: end_date,
    };

    if records.is_empty() {
        return Ok(Json(AttendanceHistoryResponse {
            status: "success",
            employee_id: query.employee_id,
            employee_name: None,
            message: Some("No attendance records found for the specified period".to_string()),
            total_records: 0,
            date_range,
            summary: None,
            records: Vec::new(),
        }));
    }

    let summary = AttendanceSummary {
        present_days: records.iter().filter(|r| r.status == "Present").count(),
        late_days: records.iter().filter(|r| r.status == "Late").count(),
        absent_days: records.iter().filter(|r| r.status == "Absent").count(),
        total_working_days: records.len(),
    };

    let employee_name = records[0].employee_name.clone();
    let entries = records
        .into_iter()
        .map(|r| AttendanceEntry {
            date: r.date,
            check_in_time: r.check_in_time,
            check_out_time: r.check_out_time,
            working_hours: r.working_hours,
            status: r.status,
            location: r.location,
        })
        .collect::<Vec<_>>();

    Ok(Json(AttendanceHistoryResponse {
        status: "success",
        employee_id: query.employee_id,
        employee_name: Some(employee_name),
        message: None,
        total_records: entries.len(),
        date_range,
        summary: Some(summary),
        records: entries,
    }))
}
