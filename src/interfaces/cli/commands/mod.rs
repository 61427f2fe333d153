//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

pub mod config_management;
mod init_schema;
mod link_management;

pub use init_schema::init_schema;
pub use link_management::*;
