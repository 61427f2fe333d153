//! Add link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkStore;

pub async fn add_link(store: &LinkStore, url: &str, category: &str) -> Result<(), CliError> {
    let link = store.add(url, category).await?;

    println!(
        "{} Added link {}: {} -> {}",
        "✓".bold().green(),
        format!("#{}", link.id).cyan(),
        link.category.magenta(),
        link.url.blue().underline()
    );
    Ok(())
}
