//! Remove link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkStore;
use crate::storage::LinkId;

pub async fn remove_link(store: &LinkStore, id: LinkId) -> Result<(), CliError> {
    store.remove(id).await?;

    println!(
        "{} Deleted link: {}",
        "✓".bold().green(),
        format!("#{}", id).cyan()
    );
    Ok(())
}
