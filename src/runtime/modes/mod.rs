//! Mode routing
//!
//! - Server mode (HTTP server, the default when no subcommand is given)
//! - CLI mode (one management command, then exit)

pub mod server;

pub use server::run_server;
