//! Merge command implementation

use super::input::read_pages;
use anyhow::{Context, Result};
use folio_core::merge_pages;
use std::fs;

/// Merge a page list back into chapter text
pub fn merge(pages_path: &str, output: Option<&str>) -> Result<()> {
    let pages = read_pages(pages_path)?;
    let text = merge_pages(&pages);

    match output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            tracing::info!("Merged {} pages -> {}", pages.len(), path);
        }
        None => println!("{}", text),
    }

    Ok(())
}
