//! Split command implementation

use super::input::{print_pages, read_text};
use anyhow::{Context, Result};
use folio_core::split_chapter;

/// Split chapter text into pages
pub fn split(input: &str, start: u32, json: bool) -> Result<()> {
    let text = read_text(input)?;
    let pages = split_chapter(&text, start)
        .with_context(|| format!("Failed to split '{}' from page {}", input, start))?;

    tracing::info!("Split '{}' into {} pages", input, pages.len());

    if json {
        return print_pages(&pages);
    }

    for page in &pages {
        println!(
            "Page {:>4}  {:<8}  {:>5} words",
            page.page_number(),
            format!("{:?}", page.status()),
            page.word_count()
        );
    }

    Ok(())
}
