//! Service layer for business logic
//!
//! This module provides link logic shared between the HTTP API and the CLI.

pub mod category;
mod link_store;

pub use category::{ALL_CATEGORIES, CategoryFilter, CategoryOrder, CategoryPolicy};
pub use link_store::LinkStore;
