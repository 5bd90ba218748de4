//! HR support tickets raised by merchant staff.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HrSupportTicket {
    pub id: i32,
    pub employee_id: String,
    pub employee_name: String,
    pub category: String,
    pub subject: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Input for raising a support ticket.
#[derive(Debug, Clone)]
pub struct CreateSupportTicket {
    pub employee_id: String,
    pub employee_name: String,
    pub category: String,
    pub subject: String,
    pub description: String,
    pub priority: String,
}
