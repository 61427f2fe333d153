//! Config management commands

mod config_gen;

pub use config_gen::{DEFAULT_CONFIG_OUTPUT, generate_config};
