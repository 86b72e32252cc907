//! Reflow and compact command implementations

use super::input::{print_pages, read_pages, read_text};
use anyhow::{Context, Result};
use folio_core::{merge_short_pages, redistribute, Page, PaperSize};
use uuid::Uuid;

/// Use the given chapter id, else the one already on the pages, else a fresh one
fn resolve_chapter_id(pages: &[Page], chapter_id: Option<Uuid>) -> Uuid {
    chapter_id
        .or_else(|| pages.iter().find_map(Page::chapter_id))
        .unwrap_or_else(Uuid::new_v4)
}

/// Replace one page's content and reflow the page list
pub fn reflow(
    pages_path: &str,
    page: u32,
    content_path: &str,
    paper: PaperSize,
    chapter_id: Option<Uuid>,
) -> Result<()> {
    let pages = read_pages(pages_path)?;
    let content = read_text(content_path)?;
    let chapter_id = resolve_chapter_id(&pages, chapter_id);

    let reflowed = redistribute(&pages, page, &content, paper, chapter_id)
        .with_context(|| format!("Failed to reflow page {}", page))?;

    tracing::info!(
        "Reflowed page {} on {}: {} -> {} pages",
        page,
        paper,
        pages.len(),
        reflowed.len()
    );

    print_pages(&reflowed)
}

/// Merge adjacent short pages within the paper budget
pub fn compact(pages_path: &str, paper: PaperSize, chapter_id: Option<Uuid>) -> Result<()> {
    let pages = read_pages(pages_path)?;
    let chapter_id = resolve_chapter_id(&pages, chapter_id);

    let compacted = merge_short_pages(&pages, paper, chapter_id)
        .with_context(|| format!("Failed to compact pages from '{}'", pages_path))?;

    tracing::info!(
        "Compacted {} pages into {} on {}",
        pages.len(),
        compacted.len(),
        paper
    );

    print_pages(&compacted)
}
