//! Data models for the chatbot service.

mod attendance;
mod employee;
mod leave;
mod menu;
mod payslip;
mod sales;
mod support;

pub use attendance::AttendanceRecord;
pub use employee::{CreateEmployee, Employee};
pub use leave::{CreateLeaveApplication, LeaveApplication};
pub use menu::{ChatbotMenu, ChatbotSubmenu, MenuTree, SubmenuEntry};
pub use payslip::Payslip;
pub use sales::{DailySalesTotal, SalesRecord};
pub use support::{CreateSupportTicket, HrSupportTicket};
