//! Payslips.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in `payslips`. Money fields are pre-formatted display strings, as
/// produced by the upstream payroll system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payslip {
    pub id: i32,
    pub employee_id: String,
    pub employee_name: String,
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
    pub download_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
