//! HTTP handlers.

pub mod app;
pub mod attendance;
pub mod employee;
pub mod leave;
pub mod menu;
pub mod merchant;
pub mod payroll;

use serde::Deserialize;

/// Query parameter shared by the per-employee endpoints.
#[derive(Debug, Deserialize)]
pub struct EmployeeQuery {
    pub employee_id: String,
}
