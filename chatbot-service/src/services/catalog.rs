//! Canned menu catalog.
//!
//! Served whenever the live store has no rows for a company type or the
//! query fails. Built once at first use and never mutated; synthetic ids
//! live in the 9xxx range so they cannot collide with live rows.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::{MenuTree, SubmenuEntry};

/// Menu key of the retention-executor tree inside the `icp_hr` entry.
pub const RETENTION_EXECUTOR_KEY: &str = "retention_executor";

/// Canned trees for a company type. Unknown types yield an empty list.
pub fn general_menus(company_type: &str) -> Vec<MenuTree> {
    GENERAL.get(company_type).cloned().unwrap_or_default()
}

/// Canned trees for an exact `(company_type, role)` pair. Absent pairs
/// yield an empty list; there is no further fallback.
pub fn role_scoped_menus(company_type: &str, role: &str) -> Vec<MenuTree> {
    ROLE_SCOPED
        .get(&(company_type, role))
        .cloned()
        .unwrap_or_default()
}

/// Company types the general catalog covers.
pub fn company_types() -> Vec<&'static str> {
    let mut types: Vec<_> = GENERAL.keys().copied().collect();
    types.sort_unstable();
    types
}

static GENERAL: Lazy<HashMap<&'static str, Vec<MenuTree>>> = Lazy::new(|| {
    let mut catalog = HashMap::new();

    // "merchant" menus live under the icp_hr tenant with the
    // merchant_manager role; the catalog mirrors that repurposing so both
    // company types fall back to the same trees.
    let mut icp_hr = merchant_manager_trees();
    icp_hr.push(retention_executor_tree());

    catalog.insert("icp_hr", icp_hr);
    catalog.insert("merchant", merchant_manager_trees());
    catalog.insert("pos_youhr", pos_youhr_trees());
    catalog.insert("retail", retail_trees());
    catalog.insert("restaurant", restaurant_trees());
    catalog
});

static ROLE_SCOPED: Lazy<HashMap<(&'static str, &'static str), Vec<MenuTree>>> = Lazy::new(|| {
    let mut catalog = HashMap::new();
    catalog.insert(("icp_hr", "merchant_manager"), merchant_manager_trees());
    catalog.insert(
        ("icp_hr", RETENTION_EXECUTOR_KEY),
        vec![retention_executor_tree()],
    );
    catalog
});

fn tree(
    id: i32,
    key: &str,
    title: &str,
    icon: &str,
    company_type: &str,
    role: Option<&str>,
    submenus: &[(&str, &str, &str)],
) -> MenuTree {
    MenuTree {
        menu_id: id,
        menu_key: key.to_string(),
        menu_title: title.to_string(),
        menu_icon: Some(icon.to_string()),
        company_type: Some(company_type.to_string()),
        role: role.map(str::to_string),
        submenus: submenus
            .iter()
            .enumerate()
            .map(|(i, (skey, stitle, endpoint))| SubmenuEntry {
                submenu_id: id * 10 + i as i32 + 1,
                submenu_key: skey.to_string(),
                submenu_title: stitle.to_string(),
                api_endpoint: endpoint.to_string(),
            })
            .collect(),
    }
}

fn merchant_manager_trees() -> Vec<MenuTree> {
    vec![
        tree(
            9101,
            "merchant_sales_money",
            "Sales & Money",
            "📋",
            "icp_hr",
            Some("merchant_manager"),
            &[
                ("today_sales", "Today's Sales", "/api/merchant/sales/today"),
                (
                    "yesterday_sales",
                    "Yesterday's Sales",
                    "/api/merchant/sales/yesterday",
                ),
                ("weekly_sales", "Weekly Sales", "/api/merchant/sales/weekly"),
                (
                    "outstanding_payments",
                    "Outstanding Payments",
                    "/api/merchant/payments/outstanding",
                ),
                (
                    "expenses_bills",
                    "Expenses & Bills",
                    "/api/merchant/expenses/bills",
                ),
            ],
        ),
        tree(
            9102,
            "merchant_my_staff",
            "My Staff",
            "📋",
            "icp_hr",
            Some("merchant_manager"),
            &[
                (
                    "view_attendance",
                    "View Attendance",
                    "/api/merchant/staff/attendance",
                ),
                (
                    "approve_leave_requests",
                    "Approve Leave Requests",
                    "/api/merchant/staff/leave-requests",
                ),
                (
                    "messages_from_staff",
                    "Messages from Staff",
                    "/api/merchant/staff/messages",
                ),
                (
                    "add_new_employee",
                    "Add New Employee",
                    "/api/merchant/staff/add-employee",
                ),
                (
                    "view_mark_salary",
                    "View/Mark Salary Paid",
                    "/api/merchant/staff/salary",
                ),
                (
                    "hr_support",
                    "HR Support Issue",
                    "/api/merchant/staff/hr-support",
                ),
            ],
        ),
        tree(
            9103,
            "merchant_marketing_growth",
            "Marketing & Growth",
            "📋",
            "icp_hr",
            Some("merchant_manager"),
            &[
                (
                    "whatsapp_campaign",
                    "Run WhatsApp Campaign",
                    "/api/merchant/marketing/whatsapp-campaign",
                ),
                (
                    "instant_promo",
                    "Send Instant Promotion",
                    "/api/merchant/marketing/instant-promotion",
                ),
                (
                    "campaign_results",
                    "Check Campaign Results",
                    "/api/merchant/marketing/results",
                ),
                ("loan_status", "Check Loan Status", "/api/merchant/loans/status"),
                (
                    "continue_loan",
                    "Continue Loan Application",
                    "/api/merchant/loans/continue",
                ),
            ],
        ),
        tree(
            9104,
            "merchant_notifications",
            "Notifications",
            "📋",
            "icp_hr",
            Some("merchant_manager"),
            &[
                (
                    "approve_leave_requests_pending",
                    "Approve Pending Leave Requests",
                    "/api/merchant/notifications/approve-leave",
                ),
                (
                    "approve_shift_changes",
                    "Approve Shift Change Requests",
                    "/api/merchant/notifications/approve-shift",
                ),
                (
                    "payment_settlement_update",
                    "Latest Payment Settlement Update",
                    "/api/merchant/notifications/payment-settlement",
                ),
                (
                    "renew_subscription",
                    "Renew Subscription",
                    "/api/merchant/notifications/renew-subscription",
                ),
                (
                    "head_office_messages",
                    "Messages from Head Office",
                    "/api/merchant/notifications/head-office",
                ),
                (
                    "manage_notification_settings",
                    "Manage Notification Settings",
                    "/api/merchant/notifications/settings",
                ),
            ],
        ),
        tree(
            9105,
            "merchant_help_support",
            "Help & Support",
            "📋",
            "icp_hr",
            Some("merchant_manager"),
            &[
                (
                    "report_pos_app",
                    "Report POS App Problem",
                    "/api/merchant/help/report-pos",
                ),
                (
                    "report_hardware",
                    "Report Hardware Issue",
                    "/api/merchant/help/report-hardware",
                ),
                (
                    "report_camera",
                    "Report AI Camera Problem",
                    "/api/merchant/help/report-camera",
                ),
                (
                    "request_camera_install",
                    "Request Camera Installation/Training",
                    "/api/merchant/help/request-camera",
                ),
                (
                    "general_support",
                    "Ask for General Support",
                    "/api/merchant/help/general",
                ),
            ],
        ),
        tree(
            9106,
            "merchant_feedback_ideas",
            "Feedback & Ideas",
            "📋",
            "icp_hr",
            Some("merchant_manager"),
            &[
                (
                    "rate_experience",
                    "Rate Your Experience",
                    "/api/merchant/feedback/rate",
                ),
                ("share_feedback", "Share Feedback", "/api/merchant/feedback-ideas"),
                (
                    "suggest_feature",
                    "Suggest a Feature",
                    "/api/merchant/feedback/suggest",
                ),
                (
                    "view_past_suggestions",
                    "View Past Suggestions",
                    "/api/merchant/feedback/list",
                ),
            ],
        ),
    ]
}

fn retention_executor_tree() -> MenuTree {
    tree(
        9200,
        RETENTION_EXECUTOR_KEY,
        "Retention Executor",
        "🔄",
        "icp_hr",
        Some(RETENTION_EXECUTOR_KEY),
        &[
            (
                "assigned_merchants",
                "Assigned Merchants",
                "/api/icp/executor/assigned-merchants",
            ),
            (
                "daily_schedule",
                "Daily Schedule",
                "/api/icp/executor/daily-schedule",
            ),
            (
                "task_completion",
                "Task Completion",
                "/api/icp/executor/task-completion",
            ),
            (
                "merchant_profile",
                "Merchant Profile",
                "/api/icp/executor/merchant-profile/{merchant_id}",
            ),
            (
                "follow_up_schedule",
                "Follow-up Schedule",
                "/api/icp/executor/follow-up-schedule",
            ),
            (
                "retention_metrics",
                "Retention Metrics",
                "/api/icp/executor/retention-metrics",
            ),
        ],
    )
}

fn pos_youhr_trees() -> Vec<MenuTree> {
    vec![
        tree(
            9301,
            "attendance",
            "📅 Attendance & Time Management",
            "📅",
            "pos_youhr",
            Some("employee"),
            &[
                (
                    "check_status",
                    "Check my attendance status",
                    "/api/attendance/status",
                ),
                (
                    "mark_attendance",
                    "Mark attendance (check-in/check-out)",
                    "/api/attendance/mark",
                ),
                (
                    "attendance_history",
                    "View attendance history",
                    "/api/attendance/history",
                ),
                (
                    "request_correction",
                    "Request attendance correction",
                    "/api/attendance/correction",
                ),
                (
                    "working_hours",
                    "View working hours",
                    "/api/attendance/working-hours",
                ),
                (
                    "late_status",
                    "Check late arrival status",
                    "/api/attendance/late-status",
                ),
            ],
        ),
        tree(
            9302,
            "leave",
            "🏖️ Leave Management",
            "🏖️",
            "pos_youhr",
            Some("employee"),
            &[
                ("leave_balance", "Check leave balance", "/api/leave/balance"),
                ("apply_leave", "Apply for new leave", "/api/leave/apply"),
                ("leave_history", "View leave history", "/api/leave/history"),
                ("cancel_leave", "Cancel leave request", "/api/leave/cancel"),
                (
                    "leave_approval_status",
                    "Check leave approval status",
                    "/api/leave/status",
                ),
                (
                    "leave_calendar",
                    "Download leave calendar",
                    "/api/leave/calendar",
                ),
            ],
        ),
        tree(
            9303,
            "payroll",
            "💵 Payroll",
            "💵",
            "pos_youhr",
            Some("employee"),
            &[
                ("salary_details", "Check salary details", "/api/payroll/salary"),
                ("payslips", "View payslips", "/api/payroll/payslips"),
                ("tax_deductions", "Check tax deductions", "/api/payroll/tax"),
                ("bonus_info", "View bonus information", "/api/payroll/bonus"),
                (
                    "bank_details",
                    "Bank account details",
                    "/api/payroll/bank-details",
                ),
                (
                    "salary_revision",
                    "Salary revision history",
                    "/api/payroll/revisions",
                ),
            ],
        ),
        tree(
            9304,
            "employee_info",
            "👥 Employee Information",
            "👥",
            "pos_youhr",
            Some("employee"),
            &[
                ("my_profile", "View my profile", "/api/employee/profile"),
                (
                    "update_details",
                    "Update personal details",
                    "/api/employee/update",
                ),
                (
                    "employment_status",
                    "Check employment status",
                    "/api/employee/status",
                ),
                (
                    "company_policies",
                    "View company policies",
                    "/api/policies/list",
                ),
                ("contact_hr", "Contact HR team", "/api/hr/contact"),
                (
                    "emergency_contacts",
                    "Emergency contacts",
                    "/api/employee/emergency",
                ),
            ],
        ),
    ]
}

fn retail_trees() -> Vec<MenuTree> {
    vec![
        tree(
            9401,
            "retail_sales",
            "Sales Analytics",
            "📊",
            "retail",
            None,
            &[
                ("daily_sales", "Daily Sales Report", "/api/sales/daily"),
                ("weekly_sales", "Weekly Sales Report", "/api/sales/weekly"),
                ("monthly_sales", "Monthly Sales Report", "/api/sales/monthly"),
                (
                    "merchant_performance",
                    "Merchant Performance",
                    "/api/sales/performance",
                ),
            ],
        ),
        tree(
            9402,
            "retail_inventory",
            "Inventory",
            "📦",
            "retail",
            None,
            &[
                ("stock_levels", "Stock Levels", "/api/inventory/stock"),
                ("product_catalog", "Product Catalog", "/api/inventory/catalog"),
                (
                    "supplier_management",
                    "Supplier Management",
                    "/api/inventory/suppliers",
                ),
                ("inventory_alerts", "Inventory Alerts", "/api/inventory/alerts"),
            ],
        ),
        tree(
            9403,
            "retail_marketing",
            "Marketing",
            "📣",
            "retail",
            None,
            &[
                (
                    "marketing_campaigns",
                    "Marketing Campaigns",
                    "/api/marketing/campaigns",
                ),
                (
                    "customer_segments",
                    "Customer Segments",
                    "/api/marketing/segments",
                ),
                (
                    "promotional_offers",
                    "Promotional Offers",
                    "/api/marketing/offers",
                ),
                (
                    "marketing_analytics",
                    "Marketing Analytics",
                    "/api/marketing/analytics",
                ),
            ],
        ),
    ]
}

fn restaurant_trees() -> Vec<MenuTree> {
    vec![
        tree(
            9501,
            "restaurant_staff",
            "Staff Management",
            "👨‍🍳",
            "restaurant",
            None,
            &[
                ("staff_attendance", "Staff Attendance", "/api/staff/attendance"),
                ("staff_schedule", "Staff Schedule", "/api/staff/schedule"),
                (
                    "performance_review",
                    "Performance Review",
                    "/api/staff/performance",
                ),
                (
                    "payroll_management",
                    "Payroll Management",
                    "/api/staff/payroll",
                ),
            ],
        ),
        tree(
            9502,
            "restaurant_finance",
            "Finance",
            "💰",
            "restaurant",
            None,
            &[
                ("revenue_reports", "Revenue Reports", "/api/finance/revenue"),
                ("expense_tracking", "Expense Tracking", "/api/finance/expenses"),
                ("profit_loss", "Profit & Loss", "/api/finance/profit-loss"),
                ("tax_reports", "Tax Reports", "/api/finance/tax-reports"),
            ],
        ),
        tree(
            9503,
            "restaurant_customers",
            "Customers",
            "🤝",
            "restaurant",
            None,
            &[
                (
                    "customer_database",
                    "Customer Database",
                    "/api/customers/database",
                ),
                ("loyalty_programs", "Loyalty Programs", "/api/customers/loyalty"),
                (
                    "customer_feedback",
                    "Customer Feedback",
                    "/api/customers/feedback",
                ),
                ("support_tickets", "Support Tickets", "/api/customers/support"),
            ],
        ),
    ]
}
