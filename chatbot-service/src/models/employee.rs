//! Employee master data.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i32,
    pub employee_id: String,
    pub employee_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub position: String,
    pub employment_type: String,
    pub employment_status: String,
    pub hire_date: NaiveDate,
    pub reporting_manager: Option<String>,
    pub office_location: Option<String>,
    pub salary_grade: Option<String>,
    pub probation_end_date: Option<NaiveDate>,
    pub last_promotion_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an employee record.
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub employee_id: String,
    pub employee_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub position: String,
    pub employment_type: String,
    pub employment_status: String,
    pub hire_date: NaiveDate,
    pub reporting_manager: Option<String>,
    pub office_location: Option<String>,
}
