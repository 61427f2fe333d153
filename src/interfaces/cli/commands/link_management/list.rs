//! List links command

use colored::Colorize;

use super::format_link_line;
use crate::interfaces::cli::CliError;
use crate::services::{CategoryFilter, LinkStore};

pub async fn list_links(
    store: &LinkStore,
    category: Option<&str>,
    json: bool,
) -> Result<(), CliError> {
    let filter = CategoryFilter::parse(category);
    let links = store.list_filtered(&filter).await?;

    if json {
        let output = serde_json::to_string_pretty(&links)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize links: {}", e)))?;
        println!("{}", output);
        return Ok(());
    }

    if links.is_empty() {
        match &filter {
            CategoryFilter::All => println!("{} No links found", "ℹ".bold().blue()),
            CategoryFilter::Only(name) => println!(
                "{} No links found in category {}",
                "ℹ".bold().blue(),
                name.magenta()
            ),
        }
        return Ok(());
    }

    println!("{}", "Link list:".bold().green());
    println!();
    for link in &links {
        println!("  {}", format_link_line(link));
    }
    println!();
    println!(
        "{} Total {} links",
        "ℹ".bold().blue(),
        links.len().to_string().green()
    );
    Ok(())
}
