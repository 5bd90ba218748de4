//! Menu resolution: live store data first, canned catalog on empty or
//! failure.

use std::sync::Arc;

use crate::models::MenuTree;
use crate::services::catalog;
use crate::services::store::{MenuStore, StoreError};

/// Tenant aliases: requested company type mapped to the canonical
/// `(company_type, default role)` pair the store is actually keyed by.
/// "merchant" menus were historically moved under the icp_hr tenant.
const TENANT_ALIASES: &[(&str, (&str, &str))] = &[("merchant", ("icp_hr", "merchant_manager"))];

/// Ephemeral context for one resolution call.
#[derive(Debug, Clone)]
pub struct MenuRequest {
    pub company_type: String,
    pub role: Option<String>,
}

impl MenuRequest {
    pub fn new(company_type: impl Into<String>, role: Option<String>) -> Self {
        Self {
            company_type: company_type.into(),
            role,
        }
    }
}

/// Where the resolved trees came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSource {
    Live,
    Mock,
}

/// Ordered menu trees plus their provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuResolution {
    pub source: MenuSource,
    pub menus: Vec<MenuTree>,
}

/// Store-query scope after alias normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QueryScope {
    company_type: String,
    role: Option<String>,
    /// Submenus are additionally filtered by `(company_type, role)`.
    scope_submenus: bool,
}

fn normalize(request: &MenuRequest) -> QueryScope {
    if let Some((_, (canonical, default_role))) = TENANT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == request.company_type)
    {
        let role = request
            .role
            .clone()
            .unwrap_or_else(|| default_role.to_string());
        return QueryScope {
            company_type: canonical.to_string(),
            role: Some(role),
            scope_submenus: true,
        };
    }

    QueryScope {
        company_type: request.company_type.clone(),
        role: request.role.clone(),
        scope_submenus: request.role.is_some(),
    }
}

pub struct MenuResolver {
    store: Arc<dyn MenuStore>,
}

impl MenuResolver {
    pub fn new(store: Arc<dyn MenuStore>) -> Self {
        Self { store }
    }

    /// Resolve the menu trees for a request context.
    ///
    /// Never fails: an empty or unreachable store degrades to the canned
    /// catalog, and a company type unknown to both yields an empty list.
    pub async fn resolve(&self, request: &MenuRequest) -> MenuResolution {
        match self.live_menus(&normalize(request)).await {
            Ok(menus) if !menus.is_empty() => MenuResolution {
                source: MenuSource::Live,
                menus,
            },
            Ok(_) => {
                tracing::warn!(
                    company_type = %request.company_type,
                    role = ?request.role,
                    "No live menus found, serving canned catalog"
                );
                self.fallback(request)
            }
            Err(err) => {
                tracing::warn!(
                    company_type = %request.company_type,
                    role = ?request.role,
                    error = %err,
                    "Menu store query failed, serving canned catalog"
                );
                self.fallback(request)
            }
        }
    }

    /// Strict variant: live data only, no fallback. Store errors and empty
    /// results are the caller's to handle.
    pub async fn resolve_live(&self, request: &MenuRequest) -> Result<Vec<MenuTree>, StoreError> {
        self.live_menus(&normalize(request)).await
    }

    /// Exact `(company_type, role)` resolution for the scoped endpoint
    /// family. Falls back to the role-scoped catalog, which yields an
    /// empty list for absent pairs rather than the general catalog.
    pub async fn resolve_scoped(&self, company_type: &str, role: &str) -> MenuResolution {
        let scope = QueryScope {
            company_type: company_type.to_string(),
            role: Some(role.to_string()),
            scope_submenus: true,
        };

        match self.live_menus(&scope).await {
            Ok(menus) if !menus.is_empty() => MenuResolution {
                source: MenuSource::Live,
                menus,
            },
            Ok(_) => {
                tracing::warn!(
                    company_type = %company_type,
                    role = %role,
                    "No live menus found, serving role-scoped canned catalog"
                );
                MenuResolution {
                    source: MenuSource::Mock,
                    menus: catalog::role_scoped_menus(company_type, role),
                }
            }
            Err(err) => {
                tracing::warn!(
                    company_type = %company_type,
                    role = %role,
                    error = %err,
                    "Menu store query failed, serving role-scoped canned catalog"
                );
                MenuResolution {
                    source: MenuSource::Mock,
                    menus: catalog::role_scoped_menus(company_type, role),
                }
            }
        }
    }

    async fn live_menus(&self, scope: &QueryScope) -> Result<Vec<MenuTree>, StoreError> {
        let menus = self
            .store
            .find_active_menus(&scope.company_type, scope.role.as_deref())
            .await?;

        let mut trees = Vec::with_capacity(menus.len());
        for menu in &menus {
            let (company_type, role) = if scope.scope_submenus {
                (Some(scope.company_type.as_str()), scope.role.as_deref())
            } else {
                (None, None)
            };
            let submenus = self
                .store
                .find_active_submenus(menu.id, company_type, role)
                .await?;
            trees.push(MenuTree::from_rows(menu, &submenus));
        }
        Ok(trees)
    }

    fn fallback(&self, request: &MenuRequest) -> MenuResolution {
        let mut menus = catalog::general_menus(&request.company_type);

        // Role-aware carve-out of the general fallback: retention
        // executors get only their own tree, never the full icp_hr set.
        if request.company_type == "icp_hr"
            && request.role.as_deref() == Some(catalog::RETENTION_EXECUTOR_KEY)
        {
            menus.retain(|m| m.menu_key == catalog::RETENTION_EXECUTOR_KEY);
        }

        MenuResolution {
            source: MenuSource::Mock,
            menus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChatbotMenu, ChatbotSubmenu};
    use async_trait::async_trait;

    /// In-memory store applying the same filter semantics as the SQL
    /// queries in `Database`.
    struct SeededStore {
        menus: Vec<ChatbotMenu>,
        submenus: Vec<ChatbotSubmenu>,
    }

    #[async_trait]
    impl MenuStore for SeededStore {
        async fn find_active_menus(
            &self,
            company_type: &str,
            role: Option<&str>,
        ) -> Result<Vec<ChatbotMenu>, StoreError> {
            Ok(self
                .menus
                .iter()
                .filter(|m| m.is_active)
                .filter(|m| m.company_type.as_deref() == Some(company_type))
                .filter(|m| role.is_none() || m.role.as_deref() == role)
                .cloned()
                .collect())
        }

        async fn find_active_submenus(
            &self,
            menu_id: i32,
            company_type: Option<&str>,
            role: Option<&str>,
        ) -> Result<Vec<ChatbotSubmenu>, StoreError> {
            Ok(self
                .submenus
                .iter()
                .filter(|sm| sm.is_active && sm.menu_id == menu_id)
                .filter(|sm| company_type.is_none() || sm.company_type.as_deref() == company_type)
                .filter(|sm| role.is_none() || sm.role.as_deref() == role)
                .cloned()
                .collect())
        }
    }

    struct EmptyStore;

    #[async_trait]
    impl MenuStore for EmptyStore {
        async fn find_active_menus(
            &self,
            _company_type: &str,
            _role: Option<&str>,
        ) -> Result<Vec<ChatbotMenu>, StoreError> {
            Ok(Vec::new())
        }

        async fn find_active_submenus(
            &self,
            _menu_id: i32,
            _company_type: Option<&str>,
            _role: Option<&str>,
        ) -> Result<Vec<ChatbotSubmenu>, StoreError> {
            Ok(Vec::new())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl MenuStore for FailingStore {
        async fn find_active_menus(
            &self,
            _company_type: &str,
            _role: Option<&str>,
        ) -> Result<Vec<ChatbotMenu>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn find_active_submenus(
            &self,
            _menu_id: i32,
            _company_type: Option<&str>,
            _role: Option<&str>,
        ) -> Result<Vec<ChatbotSubmenu>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn menu(id: i32, key: &str, company_type: &str, role: Option<&str>) -> ChatbotMenu {
        ChatbotMenu {
            id,
            menu_key: key.to_string(),
            menu_title: key.to_string(),
            menu_icon: None,
            is_active: true,
            company_type: Some(company_type.to_string()),
            role: role.map(str::to_string),
        }
    }

    fn submenu(
        id: i32,
        menu_id: i32,
        key: &str,
        company_type: &str,
        role: Option<&str>,
    ) -> ChatbotSubmenu {
        ChatbotSubmenu {
            id,
            menu_id,
            submenu_key: key.to_string(),
            submenu_title: key.to_string(),
            api_endpoint: format!("/api/{}", key),
            is_active: true,
            company_type: Some(company_type.to_string()),
            role: role.map(str::to_string),
        }
    }

    fn resolver(store: impl MenuStore + 'static) -> MenuResolver {
        MenuResolver::new(Arc::new(store))
    }

    #[test]
    fn normalize_aliases_merchant_to_icp_hr_merchant_manager() {
        let scope = normalize(&MenuRequest::new("merchant", None));
        assert_eq!(scope.company_type, "icp_hr");
        assert_eq!(scope.role.as_deref(), Some("merchant_manager"));
        assert!(scope.scope_submenus);
    }

    #[test]
    fn normalize_keeps_caller_role_on_aliased_tenant() {
        let scope = normalize(&MenuRequest::new("merchant", Some("admin".to_string())));
        assert_eq!(scope.company_type, "icp_hr");
        assert_eq!(scope.role.as_deref(), Some("admin"));
    }

    #[test]
    fn normalize_scopes_submenus_only_when_role_given() {
        let with_role = normalize(&MenuRequest::new("pos_youhr", Some("employee".to_string())));
        assert!(with_role.scope_submenus);

        let without_role = normalize(&MenuRequest::new("pos_youhr", None));
        assert!(!without_role.scope_submenus);
        assert_eq!(without_role.role, None);
    }

    #[tokio::test]
    async fn empty_store_serves_full_catalog_entry_per_company_type() {
        let resolver = resolver(EmptyStore);
        for company_type in catalog::company_types() {
            let resolution = resolver
                .resolve(&MenuRequest::new(company_type, None))
                .await;
            assert_eq!(resolution.source, MenuSource::Mock);
            assert_eq!(resolution.menus, catalog::general_menus(company_type));
        }
    }

    #[tokio::test]
    async fn merchant_request_resolves_against_merchant_manager_scope() {
        // A literal "merchant"-tagged row must NOT be returned; the alias
        // redirects the query to the icp_hr/merchant_manager scope.
        let store = SeededStore {
            menus: vec![
                menu(1, "direct_merchant_menu", "merchant", Some("manager")),
                menu(2, "sales_money", "icp_hr", Some("merchant_manager")),
            ],
            submenus: vec![
                submenu(10, 2, "today_sales", "icp_hr", Some("merchant_manager")),
                submenu(11, 2, "executor_only", "icp_hr", Some("retention_executor")),
            ],
        };

        let resolution = resolver(store)
            .resolve(&MenuRequest::new("merchant", None))
            .await;

        assert_eq!(resolution.source, MenuSource::Live);
        assert_eq!(resolution.menus.len(), 1);
        assert_eq!(resolution.menus[0].menu_key, "sales_money");
        // Submenus carry the scope filter too: the retention-tagged row is
        // excluded even though its parent matched.
        assert_eq!(resolution.menus[0].submenus.len(), 1);
        assert_eq!(resolution.menus[0].submenus[0].submenu_key, "today_sales");
    }

    #[tokio::test]
    async fn retention_executor_fallback_is_carved_out_of_icp_hr() {
        let resolution = resolver(EmptyStore)
            .resolve(&MenuRequest::new(
                "icp_hr",
                Some("retention_executor".to_string()),
            ))
            .await;

        assert_eq!(resolution.source, MenuSource::Mock);
        assert_eq!(resolution.menus.len(), 1);
        assert_eq!(resolution.menus[0].menu_key, "retention_executor");
    }

    #[tokio::test]
    async fn unknown_company_type_yields_empty_success() {
        let resolution = resolver(EmptyStore)
            .resolve(&MenuRequest::new("totally_unknown_type", None))
            .await;

        assert_eq!(resolution.source, MenuSource::Mock);
        assert!(resolution.menus.is_empty());
    }

    #[tokio::test]
    async fn store_error_falls_back_instead_of_propagating() {
        let resolution = resolver(FailingStore)
            .resolve(&MenuRequest::new("retail", None))
            .await;

        assert_eq!(resolution.source, MenuSource::Mock);
        assert_eq!(resolution.menus, catalog::general_menus("retail"));
    }

    #[tokio::test]
    async fn resolution_is_idempotent() {
        let store = Arc::new(SeededStore {
            menus: vec![menu(1, "attendance", "pos_youhr", Some("employee"))],
            submenus: vec![
                submenu(10, 1, "check_status", "pos_youhr", Some("employee")),
                submenu(11, 1, "mark_attendance", "pos_youhr", Some("employee")),
            ],
        });
        let resolver = MenuResolver::new(store);
        let request = MenuRequest::new("pos_youhr", Some("employee".to_string()));

        let first = resolver.resolve(&request).await;
        let second = resolver.resolve(&request).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn deactivated_submenu_is_dropped_from_result() {
        let mut inactive = submenu(11, 1, "mark_attendance", "pos_youhr", Some("employee"));
        inactive.is_active = false;

        let store = SeededStore {
            menus: vec![menu(1, "attendance", "pos_youhr", Some("employee"))],
            submenus: vec![
                submenu(10, 1, "check_status", "pos_youhr", Some("employee")),
                inactive,
            ],
        };

        let resolution = resolver(store)
            .resolve(&MenuRequest::new(
                "pos_youhr",
                Some("employee".to_string()),
            ))
            .await;

        assert_eq!(resolution.source, MenuSource::Live);
        assert_eq!(resolution.menus.len(), 1);
        assert_eq!(resolution.menus[0].submenus.len(), 1);
        assert_eq!(resolution.menus[0].submenus[0].submenu_key, "check_status");
    }

    #[tokio::test]
    async fn unscoped_request_returns_submenus_of_any_role() {
        let store = SeededStore {
            menus: vec![menu(1, "hr_ops", "pos_youhr", Some("employee"))],
            submenus: vec![
                submenu(10, 1, "for_employees", "pos_youhr", Some("employee")),
                submenu(11, 1, "for_admins", "pos_youhr", Some("admin")),
            ],
        };

        let resolution = resolver(store)
            .resolve(&MenuRequest::new("pos_youhr", None))
            .await;

        assert_eq!(resolution.menus[0].submenus.len(), 2);
    }

    #[tokio::test]
    async fn scoped_resolution_uses_role_scoped_catalog() {
        let resolution = resolver(EmptyStore)
            .resolve_scoped("icp_hr", "merchant_manager")
            .await;
        assert_eq!(resolution.source, MenuSource::Mock);
        assert_eq!(
            resolution.menus,
            catalog::role_scoped_menus("icp_hr", "merchant_manager")
        );
    }

    #[tokio::test]
    async fn scoped_resolution_of_absent_pair_is_empty() {
        let resolution = resolver(EmptyStore).resolve_scoped("retail", "cashier").await;
        assert_eq!(resolution.source, MenuSource::Mock);
        assert!(resolution.menus.is_empty());
    }

    #[tokio::test]
    async fn strict_resolution_propagates_store_errors() {
        let result = resolver(FailingStore)
            .resolve_live(&MenuRequest::new(
                "pos_youhr",
                Some("employee".to_string()),
            ))
            .await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }
}
