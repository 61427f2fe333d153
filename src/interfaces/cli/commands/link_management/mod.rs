//! Link management commands
//!
//! This module provides CLI commands for adding, browsing and removing links.

mod add;
mod categories;
mod list;
mod remove;
mod stats;

pub use add::add_link;
pub use categories::list_categories;
pub use list::list_links;
pub use remove::remove_link;
pub use stats::show_stats;

use colored::Colorize;

use crate::storage::Link;

/// 单行输出：`#id [category] url (created)`
pub(crate) fn format_link_line(link: &Link) -> String {
    format!(
        "{} {} {} {}",
        format!("#{}", link.id).bold(),
        format!("[{}]", link.category).magenta(),
        link.url.blue().underline(),
        format!("({})", link.created_at.format("%Y-%m-%d %H:%M:%S UTC"))
            .dimmed()
            .yellow()
    )
}
