//! Database service for chatbot-service.

use async_trait::async_trait;
use chrono::NaiveDate;
use service_core::error::AppError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

use crate::models::{
    AttendanceRecord, ChatbotMenu, ChatbotSubmenu, CreateEmployee, CreateLeaveApplication,
    CreateSupportTicket, DailySalesTotal, Employee, HrSupportTicket, LeaveApplication, Payslip,
    SalesRecord,
};
use crate::services::store::{MenuStore, StoreError};

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool.
    #[instrument(skip(database_url), fields(service = "chatbot-service"))]
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, AppError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Run database migrations.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    // =========================================================================
    // Employee Operations
    // =========================================================================

    /// Look up an employee by its external identifier.
    pub async fn find_employee(&self, employee_id: &str) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, employee_id, employee_name, email, phone, department, position,
                   employment_type, employment_status, hire_date, reporting_manager,
                   office_location, salary_grade, probation_end_date, last_promotion_date,
                   created_at
            FROM employees
            WHERE employee_id = $1
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to find employee: {}", e)))?;

        Ok(employee)
    }

    /// Insert a new employee. A duplicate `employee_id` maps to a conflict.
    #[instrument(skip(self, input), fields(employee_id = %input.employee_id))]
    pub async fn insert_employee(&self, input: &CreateEmployee) -> Result<Employee, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (employee_id, employee_name, email, phone, department,
                                   position, employment_type, employment_status, hire_date,
                                   reporting_manager, office_location)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, employee_id, employee_name, email, phone, department, position,
                      employment_type, employment_status, hire_date, reporting_manager,
                      office_location, salary_grade, probation_end_date, last_promotion_date,
                      created_at
            "#,
        )
        .bind(&input.employee_id)
        .bind(&input.employee_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.department)
        .bind(&input.position)
        .bind(&input.employment_type)
        .bind(&input.employment_status)
        .bind(input.hire_date)
        .bind(&input.reporting_manager)
        .bind(&input.office_location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(
                anyhow::anyhow!("Employee {} already exists", input.employee_id),
            ),
            _ => AppError::DatabaseError(anyhow::anyhow!("Failed to insert employee: {}", e)),
        })?;

        Ok(employee)
    }

    // =========================================================================
    // Attendance Operations
    // =========================================================================

    /// Attendance records for an employee inside a date window, newest first.
    pub async fn attendance_history(
        &self,
        employee_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            SELECT id, employee_id, employee_name, date, check_in_time, check_out_time,
                   working_hours, status, location, created_at
            FROM attendance_records
            WHERE employee_id = $1 AND date >= $2 AND date <= $3
            ORDER BY date DESC
            "#,
        )
        .bind(employee_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to query attendance: {}", e))
        })?;

        Ok(records)
    }

    // =========================================================================
    // Leave Operations
    // =========================================================================

    /// File a new leave application with status Pending.
    #[instrument(skip(self, input), fields(employee_id = %input.employee_id))]
    pub async fn insert_leave_application(
        &self,
        input: &CreateLeaveApplication,
    ) -> Result<LeaveApplication, AppError> {
        let application = sqlx::query_as::<_, LeaveApplication>(
            r#"
            INSERT INTO leave_applications (employee_id, employee_name, leave_type, from_date,
                                            to_date, total_days, reason)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, employee_id, employee_name, leave_type, from_date, to_date,
                      total_days, reason, status, applied_date, approved_by, approved_date,
                      comments, created_at
            "#,
        )
        .bind(&input.employee_id)
        .bind(&input.employee_name)
        .bind(&input.leave_type)
        .bind(input.from_date)
        .bind(input.to_date)
        .bind(input.total_days)
        .bind(&input.reason)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to insert leave application: {}", e))
        })?;

        Ok(application)
    }

    /// Leave applications for an employee, most recently applied first.
    pub async fn leave_applications_for(
        &self,
        employee_id: &str,
    ) -> Result<Vec<LeaveApplication>, AppError> {
        let applications = sqlx::query_as::<_, LeaveApplication>(
            r#"
            SELECT id, employee_id, employee_name, leave_type, from_date, to_date,
                   total_days, reason, status, applied_date, approved_by, approved_date,
                   comments, created_at
            FROM leave_applications
            WHERE employee_id = $1
            ORDER BY applied_date DESC, id DESC
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to query leave applications: {}", e))
        })?;

        Ok(applications)
    }

    // =========================================================================
    // Payroll Operations
    // =========================================================================

    /// Payslips for an employee, newest pay period first.
    pub async fn payslips_for(&self, employee_id: &str) -> Result<Vec<Payslip>, AppError> {
        let payslips = sqlx::query_as::<_, Payslip>(
            r#"
            SELECT id, employee_id, employee_name, pay_period, pay_period_start,
                   pay_period_end, basic_salary, allowances, gross_salary, deductions,
                   net_salary, status, generated_date, download_url, created_at
            FROM payslips
            WHERE employee_id = $1
            ORDER BY pay_period DESC
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to query payslips: {}", e)))?;

        Ok(payslips)
    }

    // =========================================================================
    // Merchant Sales Operations
    // =========================================================================

    /// Per-product sales lines for one merchant and day.
    pub async fn sales_for_date(
        &self,
        merchant_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<SalesRecord>, AppError> {
        let records = sqlx::query_as::<_, SalesRecord>(
            r#"
            SELECT id, merchant_id, product_name, quantity, amount, sale_date, created_at
            FROM sales_records
            WHERE merchant_id = $1 AND sale_date = $2
            ORDER BY id
            "#,
        )
        .bind(merchant_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to query sales: {}", e)))?;

        Ok(records)
    }

    /// Daily sales totals for a merchant since the given date.
    pub async fn daily_sales_totals(
        &self,
        merchant_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<DailySalesTotal>, AppError> {
        let totals = sqlx::query_as::<_, DailySalesTotal>(
            r#"
            SELECT sale_date, SUM(amount) AS total_sales, COUNT(id) AS transactions
            FROM sales_records
            WHERE merchant_id = $1 AND sale_date >= $2
            GROUP BY sale_date
            ORDER BY sale_date DESC
            "#,
        )
        .bind(merchant_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to query weekly sales: {}", e))
        })?;

        Ok(totals)
    }

    // =========================================================================
    // HR Support Operations
    // =========================================================================

    /// Open a new support ticket.
    #[instrument(skip(self, input), fields(employee_id = %input.employee_id))]
    pub async fn insert_support_ticket(
        &self,
        input: &CreateSupportTicket,
    ) -> Result<HrSupportTicket, AppError> {
        let ticket = sqlx::query_as::<_, HrSupportTicket>(
            r#"
            INSERT INTO hr_support_tickets (employee_id, employee_name, category, subject,
                                            description, priority)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, employee_id, employee_name, category, subject, description,
                      priority, status, created_at
            "#,
        )
        .bind(&input.employee_id)
        .bind(&input.employee_name)
        .bind(&input.category)
        .bind(&input.subject)
        .bind(&input.description)
        .bind(&input.priority)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to insert support ticket: {}", e))
        })?;

        Ok(ticket)
    }
}

#[async_trait]
impl MenuStore for Database {
    async fn find_active_menus(
        &self,
        company_type: &str,
        role: Option<&str>,
    ) -> Result<Vec<ChatbotMenu>, StoreError> {
        let menus = sqlx::query_as::<_, ChatbotMenu>(
            r#"
            SELECT id, menu_key, menu_title, menu_icon, is_active, company_type, role
            FROM chatbot_menus
            WHERE is_active = TRUE
              AND company_type = $1
              AND ($2::varchar IS NULL OR role = $2)
            ORDER BY id
            "#,
        )
        .bind(company_type)
        .bind(role)
        .fetch_all(&self.pool)
        .await?;

        Ok(menus)
    }

    async fn find_active_submenus(
        &self,
        menu_id: i32,
        company_type: Option<&str>,
        role: Option<&str>,
    ) -> Result<Vec<ChatbotSubmenu>, StoreError> {
        let submenus = sqlx::query_as::<_, ChatbotSubmenu>(
            r#"
            SELECT id, menu_id, submenu_key, submenu_title, api_endpoint, is_active,
                   company_type, role
            FROM chatbot_submenus
            WHERE is_active = TRUE
              AND menu_id = $1
              AND ($2::varchar IS NULL OR company_type = $2)
              AND ($3::varchar IS NULL OR role = $3)
            ORDER BY id
            "#,
        )
        .bind(menu_id)
        .bind(company_type)
        .bind(role)
        .fetch_all(&self.pool)
        .await?;

        Ok(submenus)
    }
}
