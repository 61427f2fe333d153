//! Stats command

use colored::Colorize;

use super::format_link_line;
use crate::interfaces::cli::CliError;
use crate::services::LinkStore;

pub async fn show_stats(store: &LinkStore, json: bool) -> Result<(), CliError> {
    let stats = store.stats().await?;

    if json {
        let output = serde_json::to_string_pretty(&stats)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize stats: {}", e)))?;
        println!("{}", output);
        return Ok(());
    }

    println!("{}", "Link statistics:".bold().green());
    println!();
    println!("  Total links:      {}", stats.total_links.to_string().cyan());
    println!(
        "  Total categories: {}",
        stats.total_categories.to_string().cyan()
    );

    if !stats.category_breakdown.is_empty() {
        println!();
        println!("  {}", "By category:".bold());
        for entry in &stats.category_breakdown {
            println!(
                "    {} {}",
                entry.category.magenta(),
                entry.count.to_string().green()
            );
        }
    }

    if !stats.recent_links.is_empty() {
        println!();
        println!("  {}", "Recent:".bold());
        for link in &stats.recent_links {
            println!("    {}", format_link_line(link));
        }
    }
    Ok(())
}
