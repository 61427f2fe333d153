//! List categories command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{CategoryOrder, LinkStore};

pub async fn list_categories(store: &LinkStore, by_count: bool) -> Result<(), CliError> {
    let order = if by_count {
        CategoryOrder::Count
    } else {
        CategoryOrder::Name
    };
    let counts = store.list_categories(order).await?;

    if counts.is_empty() {
        println!("{} No categories yet", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Categories:".bold().green());
    println!();
    let width = counts
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(0);
    for entry in &counts {
        println!(
            "  {:<width$}  {}",
            entry.category.magenta(),
            entry.count.to_string().green(),
            width = width
        );
    }
    Ok(())
}
