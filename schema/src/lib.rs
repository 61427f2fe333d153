//! Link table definition and idempotent schema setup.
//!
//! The `links` table carries a `UNIQUE` constraint on `url`; that constraint
//! is the only source of truth for deduplication.

pub use sea_orm_migration::prelude::*;

pub mod entities;
mod links_table;

pub use links_table::{URL_MAX_LENGTH, ensure_links_schema};
