//! CLI interface module
//!
//! Runs one management command against the configured storage and exits.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::LinkError;
use crate::runtime::lifetime::startup::prepare_store;
use crate::services::LinkStore;
use commands::{
    add_link, config_management, init_schema, list_categories, list_links, remove_link,
    show_stats,
};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LinkError> for CliError {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::StorageUnavailable(_) | LinkError::DatabaseConfig(_) => {
                CliError::StorageError(err.message().to_string())
            }
            _ => CliError::CommandError(err.format_simple()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    match cmd {
        // config generate 不需要存储
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_management::generate_config(output_path, force).await,
        Commands::Serve => Err(CliError::CommandError(
            "serve is not a management command".to_string(),
        )),
        other => {
            let store = prepare_store(config)
                .await
                .map_err(|e| CliError::StorageError(format!("{:#}", e)))?;
            run_store_command(other, &store).await
        }
    }
}

async fn run_store_command(cmd: Commands, store: &LinkStore) -> Result<(), CliError> {
    match cmd {
        Commands::Add { url, category } => add_link(store, &url, &category).await,
        Commands::List { category, json } => list_links(store, category.as_deref(), json).await,
        Commands::Categories { by_count } => list_categories(store, by_count).await,
        Commands::Stats { json } => show_stats(store, json).await,
        Commands::Remove { id } => remove_link(store, id).await,
        Commands::InitSchema => init_schema(store).await,
        Commands::Serve | Commands::Config { .. } => Err(CliError::CommandError(
            "command does not operate on the link store".to_string(),
        )),
    }
}
