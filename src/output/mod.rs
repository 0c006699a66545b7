//! Output module for showing links on the terminal
//!
//! This is where the "No Title" and "No Description" fallbacks are applied;
//! stored records keep missing metadata as `None`.

use crate::storage::{Link, PoppedLink};

/// Formats a link as a single `url: title` line
pub fn format_link(link: &Link) -> String {
    format!("{}: {}", link.url, link.display_title())
}

/// Formats a link with its description and timestamp
pub fn format_link_detail(link: &Link) -> String {
    format!(
        "{}\n  Title: {}\n  Description: {}\n  Added: {}",
        link.url,
        link.display_title(),
        link.display_description(),
        link.timestamp
    )
}

/// Formats a popped link, including the id it had
pub fn format_popped(popped: &PoppedLink) -> String {
    format!("[{}] {}", popped.id, format_link(&popped.link))
}

/// Formats links one per entry, in the order given
///
/// `detailed` selects the multi-line view with description and timestamp.
pub fn format_links(links: &[Link], detailed: bool) -> String {
    links
        .iter()
        .map(|link| {
            if detailed {
                format_link_detail(link)
            } else {
                format_link(link)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints links one per entry, in the order given
pub fn print_links(links: &[Link], detailed: bool) {
    if !links.is_empty() {
        println!("{}", format_links(links, detailed));
    }
}
