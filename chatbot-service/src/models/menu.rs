//! Menu and submenu models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in `chatbot_menus`.
///
/// `menu_key` is intentionally not unique across the table; menus are
/// scoped by `(company_type, role)` and the same key may recur per tenant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatbotMenu {
    pub id: i32,
    pub menu_key: String,
    pub menu_title: String,
    pub menu_icon: Option<String>,
    pub is_active: bool,
    pub company_type: Option<String>,
    pub role: Option<String>,
}

/// Row in `chatbot_submenus`. Owned by exactly one menu; deleted with it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatbotSubmenu {
    pub id: i32,
    pub menu_id: i32,
    pub submenu_key: String,
    pub submenu_title: String,
    pub api_endpoint: String,
    pub is_active: bool,
    pub company_type: Option<String>,
    pub role: Option<String>,
}

/// One resolved menu with its ordered submenus, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTree {
    pub menu_id: i32,
    pub menu_key: String,
    pub menu_title: String,
    pub menu_icon: Option<String>,
    pub company_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub submenus: Vec<SubmenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmenuEntry {
    pub submenu_id: i32,
    pub submenu_key: String,
    pub submenu_title: String,
    pub api_endpoint: String,
}

impl MenuTree {
    /// Assemble a tree from store rows, preserving row order.
    pub fn from_rows(menu: &ChatbotMenu, submenus: &[ChatbotSubmenu]) -> Self {
        Self {
            menu_id: menu.id,
            menu_key: menu.menu_key.clone(),
            menu_title: menu.menu_title.clone(),
            menu_icon: menu.menu_icon.clone(),
            company_type: menu.company_type.clone(),
            role: menu.role.clone(),
            submenus: submenus
                .iter()
                .map(|sm| SubmenuEntry {
                    submenu_id: sm.id,
                    submenu_key: sm.submenu_key.clone(),
                    submenu_title: sm.submenu_title.clone(),
                    api_endpoint: sm.api_endpoint.clone(),
                })
                .collect(),
        }
    }
}
