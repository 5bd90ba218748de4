//! Merchant endpoint integration tests: staff management and sales
//! reports.

mod common;

use chrono::{Duration, Utc};
use common::{insert_sale, TestApp};
use reqwest::Client;
use serde_json::json;

fn employee_payload(employee_id: &str) -> serde_json::Value {
    json!({
        "employee_id": employee_id,
        "employee_name": "Sanjay Kulkarni",
        "email": "sanjay.kulkarni@example.com",
        "phone": "+91-98-7654-3210",
        "department": "Sales",
        "position": "Cashier",
        "employment_type": "Part-time",
        "hire_date": "2025-11-01",
        "office_location": "MG Road Store"
    })
}

#[tokio::test]
async fn add_employee_creates_record() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/merchant/staff/add-employee", app.address))
        .json(&employee_payload("EMP100"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["employee_id"], "EMP100");
    assert_eq!(body["data"]["employment_status"], "Active");

    app.cleanup().await;
}

#[tokio::test]
async fn duplicate_employee_id_conflicts() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let url = format!("{}/api/merchant/staff/add-employee", app.address);
    let first = client
        .post(&url)
        .json(&employee_payload("EMP101"))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), reqwest::StatusCode::CREATED);

    let second = client
        .post(&url)
        .json(&employee_payload("EMP101"))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), reqwest::StatusCode::CONFLICT);

    app.cleanup().await;
}

#[tokio::test]
async fn add_employee_validates_email() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let mut payload = employee_payload("EMP102");
    payload["email"] = json!("not-an-email");

    let response = client
        .post(format!("{}/api/merchant/staff/add-employee", app.address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);

    app.cleanup().await;
}

#[tokio::test]
async fn hr_support_ticket_is_opened_with_defaults() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/merchant/staff/hr-support", app.address))
        .json(&json!({
            "employee_id": "EMP100",
            "employee_name": "Sanjay Kulkarni",
            "category": "Payroll",
            "subject": "Salary credited late",
            "description": "August salary was credited three days late."
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["data"]["priority"], "Medium");
    assert_eq!(body["data"]["status"], "Open");

    app.cleanup().await;
}

#[tokio::test]
async fn today_sales_defaults_merchant_id_with_warning() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/merchant/sales/today", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-warning"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["data"]["merchant_id"], "MERCH001");
    assert_eq!(body["data"]["total_transactions"], 0);

    app.cleanup().await;
}

#[tokio::test]
async fn today_sales_totals_per_product_lines() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    let today = Utc::now().date_naive();

    insert_sale(&app, "M042", "Coffee", 15, "450.00", today).await;
    insert_sale(&app, "M042", "Sandwich", 8, "800.00", today).await;
    // A different merchant's line must not leak in
    insert_sale(&app, "M077", "Burger", 12, "1800.00", today).await;

    let response = client
        .get(format!(
            "{}/api/merchant/sales/today?merchant_id=M042",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert!(!response.headers().contains_key("x-warning"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["data"]["total_transactions"], 2);
    assert_eq!(body["data"]["total_sales"], "1250.00");

    let products = body["data"]["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["product_name"], "Coffee");

    app.cleanup().await;
}

#[tokio::test]
async fn weekly_sales_groups_by_day() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    let today = Utc::now().date_naive();

    insert_sale(&app, "M042", "Coffee", 10, "300.00", today).await;
    insert_sale(&app, "M042", "Coffee", 12, "360.00", today - Duration::days(1)).await;
    insert_sale(&app, "M042", "Pizza", 6, "900.00", today - Duration::days(1)).await;
    // Outside the 7-day window
    insert_sale(&app, "M042", "Coffee", 9, "270.00", today - Duration::days(10)).await;

    let response = client
        .get(format!(
            "{}/api/merchant/sales/weekly?merchant_id=M042",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");

    assert_eq!(body["data"]["total_transactions"], 3);
    assert_eq!(body["data"]["total_weekly_sales"], "1560.00");

    let breakdown = body["data"]["daily_breakdown"].as_array().unwrap();
    assert_eq!(breakdown.len(), 2);
    // Newest day first
    assert_eq!(breakdown[0]["sale_date"], today.to_string());
    assert_eq!(breakdown[0]["transactions"], 1);
    assert_eq!(breakdown[1]["transactions"], 2);

    app.cleanup().await;
}
