//! Leave application endpoints.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use service_core::error::AppError;

use crate::handlers::EmployeeQuery;
use crate::models::{CreateLeaveApplication, LeaveApplication};
use crate::startup::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct LeaveApplicationRequest {
    #[validate(length(min = 1))]
    pub employee_id: String,
    #[validate(length(min = 1))]
    pub employee_name: String,
    #[validate(length(min = 1))]
    pub leave_type: String,
    pub from_date: String,
    pub to_date: String,
    #[validate(length(min = 1, max = 500))]
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct LeaveApplyResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: LeaveApplication,
}

#[derive(Debug, Serialize)]
pub struct LeaveListResponse {
    pub status: &'static str,
    pub employee_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub total_applications: usize,
    pub applications: Vec<LeaveApplication>,
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid date format: {}", e)))
}

/// File a leave application. Total days are inclusive of both endpoints.
///
/// POST /api/leave/apply
pub async fn apply_leave(
    State(state): State<AppState>,
    Json(request): Json<LeaveApplicationRequest>,
) -> Result<Json<LeaveApplyResponse>, AppError> {
    request.validate()?;

    let from_date = parse_date(&request.from_date)?;
    let to_date = parse_date(&request.to_date)?;
    if to_date < from_date {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "to_date must not precede from_date"
        )));
    }

    let total_days = (to_date - from_date).num_days() as i32 + 1;

    let application = state
        .db
        .insert_leave_application(&CreateLeaveApplication {
            employee_id: request.employee_id,
            employee_name: request.employee_name,
            leave_type: request.leave_type,
            from_date,
            to_date,
            total_days,
            reason: request.reason,
        })
        .await?;

    tracing::info!(
        application_id = application.id,
        employee_id = %application.employee_id,
        total_days = application.total_days,
        "Leave application submitted"
    );

    Ok(Json(LeaveApplyResponse {
        status: "success",
        message: "Leave application submitted successfully",
        data: application,
    }))
}

/// Leave applications for an employee, most recently applied first.
///
/// GET /api/leave/applications?employee_id=
pub async fn leave_applications(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> Result<Json<LeaveListResponse>, AppError> {
    let applications = state.db.leave_applications_for(&query.employee_id).await?;

    let message = if applications.is_empty() {
        Some("No leave applications found".to_string())
    } else {
        None
    };

    Ok(Json(LeaveListResponse {
        status: "success",
        employee_id: query.employee_id,
        message,
        total_applications: applications.len(),
        applications,
    }))
}
