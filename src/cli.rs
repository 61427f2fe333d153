//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// linkcollector - collect links by category
#[derive(Parser, Debug)]
#[command(name = "linkcollector")]
#[command(version)]
#[command(about = "Collect, deduplicate and browse links by category", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./config.toml when present)
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Add a link
    Add {
        /// Absolute URL, stored exactly as given
        url: String,

        /// Category label
        category: String,
    },

    /// List links, newest first
    List {
        /// Only show links in this category ("all" shows everything)
        #[arg(long, short = 'C')]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories with their link counts
    Categories {
        /// Sort by count (descending) instead of name
        #[arg(long)]
        by_count: bool,
    },

    /// Show link statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a link by id
    Remove {
        /// Link id
        id: i64,
    },

    /// Create the links table/collection and indexes if missing
    InitSchema,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
