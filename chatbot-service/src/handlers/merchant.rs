//! Merchant-facing endpoints: sales reports and staff management.

use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use service_core::error::AppError;

use crate::models::{
    CreateEmployee, CreateSupportTicket, DailySalesTotal, Employee, HrSupportTicket,
};
use crate::startup::AppState;

const DEFAULT_MERCHANT_ID: &str = "MERCH001";

#[derive(Debug, Deserialize)]
pub struct MerchantQuery {
    pub merchant_id: Option<String>,
}

/// Default the merchant id when callers omit it, flagging the default in
/// the log and on the response so integrations get fixed.
fn resolve_merchant_id(merchant_id: Option<String>) -> (String, Option<String>) {
    match merchant_id {
        Some(id) => (id, None),
        None => {
            let warning = format!(
                "merchant_id defaulted to {}; callers should provide merchant_id explicitly",
                DEFAULT_MERCHANT_ID
            );
            tracing::warn!("{}", warning);
            (DEFAULT_MERCHANT_ID.to_string(), Some(warning))
        }
    }
}

fn with_warning(mut response: Response, warning: Option<String>) -> Response {
    if let Some(warning) = warning {
        if let Ok(value) = HeaderValue::from_str(&warning) {
            response.headers_mut().insert("x-warning", value);
        }
    }
    response
}

#[derive(Debug, Serialize)]
pub struct ProductSales {
    pub product_name: String,
    pub quantity: i32,
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct TodaySales {
    pub date: NaiveDate,
    pub merchant_id: String,
    pub total_sales: Decimal,
    pub total_transactions: usize,
    pub products: Vec<ProductSales>,
}

#[derive(Debug, Serialize)]
pub struct TodaySalesResponse {
    pub status: &'static str,
    pub data: TodaySales,
}

/// Today's sales for a merchant, per product line.
///
/// GET /api/merchant/sales/today?merchant_id=
pub async fn today_sales(
    State(state): State<AppState>,
    Query(query): Query<MerchantQuery>,
) -> Result<Response, AppError> {
    let (merchant_id, warning) = resolve_merchant_id(query.merchant_id);
    let today = Utc::now().date_naive();

    let records = state.db.sales_for_date(&merchant_id, today).await?;

    let total_sales: Decimal = records.iter().map(|r| r.amount).sum();
    let products = records
        .iter()
        .map(|r| ProductSales {
            product_name: r.product_name.clone(),
            quantity: r.quantity,
            amount: r.amount,
        })
        .collect::<Vec<_>>();

    let body = TodaySalesResponse {
        status: "success",
        data: TodaySales {
            date: today,
            merchant_id,
            total_sales,
            total_transactions: records.len(),
            products,
        },
    };

    Ok(with_warning(Json(body).into_response(), warning))
}

#[derive(Debug, Serialize)]
pub struct WeeklySales {
    pub week_period: String,
    pub merchant_id: String,
    pub total_weekly_sales: Decimal,
    pub total_transactions: i64,
    pub daily_breakdown: Vec<DailySalesTotal>,
}

#[derive(Debug, Serialize)]
pub struct WeeklySalesResponse {
    pub status: &'static str,
    pub data: WeeklySales,
}

/// Last seven days of sales for a merchant, grouped by day.
///
/// GET /api/merchant/sales/weekly?merchant_id=
pub async fn weekly_sales(
    State(state): State<AppState>,
    Query(query): Query<MerchantQuery>,
) -> Result<Response, AppError> {
    let (merchant_id, warning) = resolve_merchant_id(query.merchant_id);
    let today = Utc::now().date_naive();
    let since = today - Duration::days(6);

    let totals = state.db.daily_sales_totals(&merchant_id, since).await?;

    let total_weekly_sales: Decimal = totals.iter().map(|t| t.total_sales).sum();
    let total_transactions: i64 = totals.iter().map(|t| t.transactions).sum();

    let body = WeeklySalesResponse {
        status: "success",
        data: WeeklySales {
            week_period: format!("{} to {}", since, today),
            merchant_id,
            total_weekly_sales,
            total_transactions,
            daily_breakdown: totals,
        },
    };

    Ok(with_warning(Json(body).into_response(), warning))
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddEmployeeRequest {
    #[validate(length(min = 1))]
    pub employee_id: String,
    #[validate(length(min = 1))]
    pub employee_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub department: String,
    #[validate(length(min = 1))]
    pub position: String,
    #[validate(length(min = 1))]
    pub employment_type: String,
    pub hire_date: String,
    pub reporting_manager: Option<String>,
    pub office_location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddEmployeeResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: Employee,
}

/// Register a new staff member. Duplicate employee ids are a 409.
///
/// POST /api/merchant/staff/add-employee
pub async fn add_employee(
    State(state): State<AppState>,
    Json(request): Json<AddEmployeeRequest>,
) -> Result<(StatusCode, Json<AddEmployeeResponse>), AppError> {
    request.validate()?;

    let hire_date = NaiveDate::parse_from_str(&request.hire_date, "%Y-%m-%d")
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid date format: {}", e)))?;

    let employee = state
        .db
        .insert_employee(&CreateEmployee {
            employee_id: request.employee_id,
            employee_name: request.employee_name,
            email: request.email,
            phone: request.phone,
            department: request.department,
            position: request.position,
            employment_type: request.employment_type,
            employment_status: "Active".to_string(),
            hire_date,
            reporting_manager: request.reporting_manager,
            office_location: request.office_location,
        })
        .await?;

    tracing::info!(employee_id = %employee.employee_id, "Employee added");

    Ok((
        StatusCode::CREATED,
        Json(AddEmployeeResponse {
            status: "success",
            message: "Employee added successfully",
            data: employee,
        }),
    ))
}

#[derive(Debug, Deserialize, Validate)]
pub struct HrSupportRequest {
    #[validate(length(min = 1))]
    pub employee_id: String,
    #[validate(length(min = 1))]
    pub employee_name: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_priority() -> String {
    "Medium".to_string()
}

#[derive(Debug, Serialize)]
pub struct HrSupportResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: HrSupportTicket,
}

/// Raise an HR support ticket on behalf of merchant staff.
///
/// POST /api/merchant/staff/hr-support
pub async fn submit_hr_support(
    State(state): State<AppState>,
    Json(request): Json<HrSupportRequest>,
) -> Result<(StatusCode, Json<HrSupportResponse>), AppError> {
    request.validate()?;

    let ticket = state
        .db
        .insert_support_ticket(&CreateSupportTicket {
            employee_id: request.employee_id,
            employee_name: request.employee_name,
            category: request.category,
            subject: request.subject,
            description: request.description,
            priority: request.priority,
        })
        .await?;

    tracing::info!(ticket_id = ticket.id, "HR support ticket opened");

    Ok((
        StatusCode::CREATED,
        Json(HrSupportResponse {
            status: "success",
            message: "HR support request submitted successfully",
            data: ticket,
        }),
    ))
}
