//! Menu resolution endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use service_core::error::AppError;

use crate::models::MenuTree;
use crate::services::{MenuRequest, MenuSource};
use crate::startup::AppState;

#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    pub role: Option<String>,
}

/// Both parameters are required; validated here so a missing one
/// surfaces as 422 rather than a bare rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct MenusWithSubmenusQuery {
    #[validate(required, length(min = 1))]
    pub company_type: Option<String>,
    #[validate(required, length(min = 1))]
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MenuListResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Vec<MenuTree>,
}

impl MenuListResponse {
    fn live(menus: Vec<MenuTree>) -> Self {
        Self {
            status: "success",
            message: None,
            data: menus,
        }
    }

    fn mock(menus: Vec<MenuTree>) -> Self {
        Self {
            status: "success",
            message: Some("Serving canned menu data".to_string()),
            data: menus,
        }
    }
}

/// Menus for a company type, optionally narrowed by role.
///
/// Always answers 200: empty or unreachable live data degrades to the
/// canned catalog, flagged through the `message` field.
///
/// GET /api/menu/{company_type}?role=
pub async fn menus_by_company_type(
    State(state): State<AppState>,
    Path(company_type): Path<String>,
    Query(query): Query<RoleQuery>,
) -> Json<MenuListResponse> {
    let request = MenuRequest::new(company_type, query.role);
    let resolution = state.resolver.resolve(&request).await;

    Json(match resolution.source {
        MenuSource::Live => MenuListResponse::live(resolution.menus),
        MenuSource::Mock => MenuListResponse::mock(resolution.menus),
    })
}

/// Strict menu lookup: live rows only, 404 when nothing matches.
///
/// GET /api/chatbot/menus-with-submenus?company_type=&role=
pub async fn menus_with_submenus(
    State(state): State<AppState>,
    Query(query): Query<MenusWithSubmenusQuery>,
) -> Result<Json<MenuListResponse>, AppError> {
    query.validate()?;
    let company_type = query.company_type.unwrap_or_default();
    let role = query.role.unwrap_or_default();

    let request = MenuRequest::new(company_type.clone(), Some(role));
    let menus = state
        .resolver
        .resolve_live(&request)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Menu lookup failed: {}", e)))?;

    if menus.is_empty() {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "No menus found for company type: {}",
            company_type
        )));
    }

    Ok(Json(MenuListResponse::live(menus)))
}

/// Merchant manager menus under the icp_hr tenant, for the frontend that
/// calls the fixed scope directly.
///
/// GET /api/icp/merchant/get-menus
pub async fn merchant_manager_menus(State(state): State<AppState>) -> Json<MenuListResponse> {
    let resolution = state
        .resolver
        .resolve_scoped("icp_hr", "merchant_manager")
        .await;

    Json(match resolution.source {
        MenuSource::Live => MenuListResponse::live(resolution.menus),
        MenuSource::Mock => MenuListResponse::mock(resolution.menus),
    })
}
