//! Payslip endpoint.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use service_core::error::AppError;

use crate::handlers::EmployeeQuery;
use crate::startup::AppState;

#[derive(Debug, Serialize)]
pub struct PayslipEntry {
    pub payslip_id: i32,
    pub pay_period: String,
    pub pay_period_start: NaiveDate,
    pub pay_period_end: NaiveDate,
    pub basic_salary: String,
    pub allowances: String,
    pub gross_salary: String,
    pub deductions: String,
    pub net_salary: String,
    pub status: String,
    pub generated_date: NaiveDate,
    pub download_url: String,
}

#[derive(Debug, Serialize)]
pub struct PayslipListResponse {
    pub status: &'static str,
    pub employee_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub total_payslips: usize,
    pub payslips: Vec<PayslipEntry>,
}

/// Payslips for an employee, newest pay period first.
///
/// GET /api/payroll/payslips?employee_id=
pub async fn payslips(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> Result<Json<PayslipListResponse>, AppError> {
    let payslips = state.db.payslips_for(&query.employee_id).await?;

    if payslips.is_empty() {
        return Ok(Json(PayslipListResponse {
            status: "success",
            employee_id: query.employee_id,
            employee_name: None,
            message: Some("No payslips found".to_string()),
            total_payslips: 0,
            payslips: Vec::new(),
        }));
    }

    let employee_name = payslips[0].employee_name.clone();
    let entries = payslips
        .into_iter()
        .map(|p| {
            let download_url = p
                .download_url
                .clone()
                .unwrap_or_else(|| format!("/api/payroll/download/{}", p.id));
            PayslipEntry {
                payslip_id: p.id,
                pay_period: p.pay_period,
                pay_period_start: p.pay_period_start,
                pay_period_end: p.pay_period_end,
                basic_salary: p.basic_salary,
                allowances: p.allowances,
                gross_salary: p.gross_salary,
                deductions: p.deductions,
                net_salary: p.net_salary,
                status: p.status,
                generated_date: p.generated_date,
                download_url,
            }
        })
        .collect::<Vec<_>>();

    Ok(Json(PayslipListResponse {
        status: "success",
        employee_id: query.employee_id,
        employee_name: Some(employee_name),
        message: None,
        total_payslips: entries.len(),
        payslips: entries,
    }))
}
