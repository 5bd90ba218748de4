//! Service layer: persistence, canned catalog and menu resolution.

pub mod catalog;
mod database;
pub mod resolver;
mod store;

pub use database::Database;
pub use resolver::{MenuRequest, MenuResolution, MenuResolver, MenuSource};
pub use store::{MenuStore, StoreError};
