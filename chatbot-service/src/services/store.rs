//! Lookup contract the menu resolver depends on.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ChatbotMenu, ChatbotSubmenu};

/// Persistence failures. The resolver converts these into the canned
/// catalog fallback instead of propagating them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Filtered menu lookups. An absent `role` means "any role".
#[async_trait]
pub trait MenuStore: Send + Sync {
    async fn find_active_menus(
        &self,
        company_type: &str,
        role: Option<&str>,
    ) -> Result<Vec<ChatbotMenu>, StoreError>;

    async fn find_active_submenus(
        &self,
        menu_id: i32,
        company_type: Option<&str>,
        role: Option<&str>,
    ) -> Result<Vec<ChatbotSubmenu>, StoreError>;
}
