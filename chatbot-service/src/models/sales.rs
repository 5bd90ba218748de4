//! Merchant sales records.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in `sales_records`: one product line for one merchant and day.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SalesRecord {
    pub id: i32,
    pub merchant_id: String,
    pub product_name: String,
    pub quantity: i32,
    pub amount: Decimal,
    pub sale_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Per-day aggregate used by the weekly sales report.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailySalesTotal {
    pub sale_date: NaiveDate,
    pub total_sales: Decimal,
    pub transactions: i64,
}
