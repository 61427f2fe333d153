//! linkcollector - collect links by category
//!
//! A small link-bookmarking service: URLs are stored with a category label,
//! deduplicated by exact URL, and browsed per category or through aggregate
//! statistics. The same `LinkStore` backs the HTTP API and the CLI.
//!
//! # Features
//! - **sled**: embedded sled document store (default)
//!
//! # Architecture
//! - `storage`: `LinkRepository` trait, SeaORM (SQLite/MySQL/PostgreSQL) and sled backends
//! - `services`: link validation, deduplication and aggregation
//! - `api`: HTTP services and middleware
//! - `interfaces`: management CLI
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
