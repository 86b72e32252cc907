//! Shared input/output helpers for commands

use anyhow::{Context, Result};
use folio_core::Page;
use std::fs;
use std::io::{self, Read};

/// Read a text file, or stdin when `path` is "-"
pub fn read_text(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path))
}

/// Read a JSON page list
pub fn read_pages(path: &str) -> Result<Vec<Page>> {
    let raw = read_text(path)?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse page list: {}", path))
}

/// Print a page list as pretty JSON
pub fn print_pages(pages: &[Page]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(pages)?);
    Ok(())
}
