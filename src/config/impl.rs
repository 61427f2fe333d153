use std::sync::Arc;

use super::StaticConfig;

/// Load the configuration for this process
///
/// Loads `path` (or `config.toml` in the current directory when `None`)
/// layered under `LC__*` environment variables. A missing default file
/// is fine; a missing explicit file or a malformed one is an error.
pub fn init_config(path: Option<&str>) -> Result<Arc<StaticConfig>, config::ConfigError> {
    StaticConfig::load(path).map(Arc::new)
}
