//! Employee status endpoint.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Serialize;

use service_core::error::AppError;

use crate::handlers::EmployeeQuery;
use crate::startup::AppState;

#[derive(Debug, Serialize)]
pub struct EmployeeStatusResponse {
    pub status: &'static str,
    pub employee_id: String,
    pub employee_name: String,
    pub employment_status: String,
    pub employment_type: String,
    pub department: String,
    pub position: String,
    pub hire_date: NaiveDate,
    pub years_of_service: f64,
    pub reporting_manager: Option<String>,
    pub office_location: Option<String>,
    pub salary_grade: Option<String>,
    pub probation_status: &'static str,
    pub last_promotion: Option<NaiveDate>,
}

/// Employment profile with derived service length and probation status.
/// Unknown employees are a 404.
///
/// GET /api/employee/status?employee_id=
pub async fn employee_status(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> Result<Json<EmployeeStatusResponse>, AppError> {
    let employee = state
        .db
        .find_employee(&query.employee_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(anyhow::anyhow!("Employee {} not found", query.employee_id))
        })?;

    let today = Utc::now().date_naive();
    let years_of_service =
        ((today - employee.hire_date).num_days() as f64 / 365.25 * 10.0).round() / 10.0;

    let probation_status = match employee.probation_end_date {
        Some(end) if today < end => "In Progress",
        _ => "Completed",
    };

    Ok(Json(EmployeeStatusResponse {
        status: "success",
        employee_id: employee.employee_id,
        employee_name: employee.employee_name,
        employment_status: employee.employment_status,
        employment_type: employee.employment_type,
        department: employee.department,
        position: employee.position,
        hire_date: employee.hire_date,
        years_of_service,
        reporting_manager: employee.reporting_manager,
        office_location: employee.office_location,
        salary_grade: employee.salary_grade,
        probation_status,
        last_promotion: employee.last_promotion_date,
    }))
}
