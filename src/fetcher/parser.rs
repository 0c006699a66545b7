//! HTML parser for extracting page metadata
//!
//! Pulls the page title from `<title>` and the description from
//! `<meta name="description" content="...">`.

use crate::fetcher::PageMetadata;
use scraper::{Html, Selector};

/// Parses HTML content and extracts the title and description
///
/// Missing elements are reported as `None`; display fallbacks are left to
/// the caller.
///
/// # Example
///
/// ```
/// use link_stacklog::fetcher::parse_metadata;
///
/// let html = r#"<html><head><title> Test </title></head></html>"#;
/// let metadata = parse_metadata(html);
/// assert_eq!(metadata.title.as_deref(), Some("Test"));
/// assert_eq!(metadata.description, None);
/// ```
pub fn parse_metadata(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    PageMetadata {
        title: extract_title(&document),
        description: extract_description(&document),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Extracts the `content` of the description meta tag
fn extract_description(document: &Html) -> Option<String> {
    let meta_selector = Selector::parse(r#"meta[name="description"]"#).ok()?;

    document
        .select(&meta_selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
}
