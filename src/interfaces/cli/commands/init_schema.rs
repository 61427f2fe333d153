//! Init schema command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkStore;

/// 建表/索引（已存在时不做任何修改）
pub async fn init_schema(store: &LinkStore) -> Result<(), CliError> {
    store.ensure_schema().await?;

    println!(
        "{} Schema is ready on backend: {}",
        "✓".bold().green(),
        store.backend_name().cyan()
    );
    Ok(())
}
