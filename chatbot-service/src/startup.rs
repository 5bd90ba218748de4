//! Application startup and lifecycle management.

use axum::{middleware, routing::get, routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use service_core::error::AppError;
use service_core::middleware::tracing::request_id_middleware;

use crate::config::ChatbotConfig;
use crate::handlers::{
    app::health_check,
    attendance::attendance_history,
    employee::employee_status,
    leave::{apply_leave, leave_applications},
    menu::{menus_by_company_type, menus_with_submenus, merchant_manager_menus},
    merchant::{add_employee, submit_hr_support, today_sales, weekly_sales},
    payroll::payslips,
};
use crate::services::{Database, MenuResolver};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ChatbotConfig,
    pub db: Arc<Database>,
    pub resolver: Arc<MenuResolver>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: ChatbotConfig) -> Result<Self, AppError> {
        Self::build_internal(config, true).await
    }

    /// Build the application without running migrations.
    /// Use this in tests when migrations are already applied by the test harness.
    pub async fn build_without_migrations(config: ChatbotConfig) -> Result<Self, AppError> {
        Self::build_internal(config, false).await
    }

    async fn build_internal(config: ChatbotConfig, run_migrations: bool) -> Result<Self, AppError> {
        // Connect to database
        let db = Database::new(
            &config.database.url,
            config.database.max_connections,
            config.database.min_connections,
        )
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to PostgreSQL");
            e
        })?;

        if run_migrations {
            db.run_migrations().await.map_err(|e| {
                tracing::error!(error = %e, "Failed to run migrations");
                e
            })?;
        }

        let db = Arc::new(db);
        let resolver = Arc::new(MenuResolver::new(db.clone()));

        let state = AppState {
            config: config.clone(),
            db,
            resolver,
        };

        // Bind HTTP listener
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!(error = %e, addr = %addr, "Failed to bind HTTP listener");
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port = port, "Chatbot service listener bound");

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &Database {
        &self.state.db
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state.clone());

        tracing::info!(
            service = "chatbot-service",
            version = env!("CARGO_PKG_VERSION"),
            port = self.port,
            "Service ready to accept connections"
        );

        axum::serve(self.listener, router).await.map_err(|e| {
            tracing::error!(error = %e, "HTTP server error");
            std::io::Error::other(format!("HTTP server error: {}", e))
        })
    }
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Menu resolution
        .route("/api/menu/:company_type", get(menus_by_company_type))
        .route(
            "/api/chatbot/menus-with-submenus",
            get(menus_with_submenus),
        )
        .route("/api/icp/merchant/get-menus", get(merchant_manager_menus))
        // HR operations
        .route("/api/attendance/history", get(attendance_history))
        .route("/api/leave/apply", post(apply_leave))
        .route("/api/leave/applications", get(leave_applications))
        .route("/api/payroll/payslips", get(payslips))
        .route("/api/employee/status", get(employee_status))
        // Merchant operations
        .route("/api/merchant/sales/today", get(today_sales))
        .route("/api/merchant/sales/weekly", get(weekly_sales))
        .route("/api/merchant/staff/add-employee", post(add_employee))
        .route("/api/merchant/staff/hr-support", post(submit_hr_support))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
