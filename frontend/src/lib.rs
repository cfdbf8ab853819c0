//! Catalog frontend for the Autoliga vehicle site.
//!
//! Loads categories and products from the backend `/api/{locale}/...`
//! endpoints, filters and paginates them in memory, and projects products
//! into card data. The `routes` module binds that state to Tera templates;
//! everything else is independent of the web framework.

pub mod brands;
pub mod card;
pub mod config;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod i18n;
pub mod locale;
pub mod menu;
pub mod models;
pub mod page;
pub mod pagination;
pub mod report;
pub mod routes;

pub use error::{CatalogError, Result};
pub use handlers::CatalogApi;
pub use locale::Locale;
pub use page::CatalogPage;
