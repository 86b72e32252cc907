//! Page reflow: keeping a page list consistent as single pages are edited
//!
//! Both operations take a page list by reference and hand back a new one.
//! The editing surface owns the mutable list, debouncing and persistence.

use crate::error::{ReflowError, Result};
use crate::overflow::split_overflow;
use crate::split::{oversized, pack_paragraphs};
use crate::types::{renumber, Page, PaperSize};
use tracing::{debug, warn};
use uuid::Uuid;

/// Apply an edit to one page and reflow the list around it.
///
/// If `new_content` fits the profile, the edited page is updated in place and
/// the list keeps its length. If it overflows, the edited slot is replaced by
/// one page per block from [`split_overflow`] and the following pages shift
/// down. Editing the page one past the end appends a new page that takes the
/// edit. The result is numbered contiguously from the list's first page
/// number (1 for an empty list), and every page is tagged with `chapter_id`.
///
/// # Errors
///
/// [`ReflowError::PageOutOfRange`] when `edited_page_number` is neither in the
/// list nor exactly one past its last page.
/// [`crate::error::NumberingError`] when the reflowed list cannot be numbered
/// from its first page number, for example when an overflowing edit near
/// `u32::MAX` would push pages past it.
pub fn redistribute(
    pages: &[Page],
    edited_page_number: u32,
    new_content: &str,
    paper: PaperSize,
    chapter_id: Uuid,
) -> Result<Vec<Page>> {
    let mut ordered = sorted(pages);
    let first = ordered.first().map(Page::page_number).unwrap_or(1);
    let last = ordered
        .last()
        .map(Page::page_number)
        .unwrap_or_else(|| first.saturating_sub(1));

    let index = match ordered
        .iter()
        .position(|p| p.page_number() == edited_page_number)
    {
        Some(index) => index,
        None if last.checked_add(1) == Some(edited_page_number) => {
            debug!(page = edited_page_number, "appending page past end of chapter");
            ordered.push(Page::empty(edited_page_number));
            ordered.len() - 1
        }
        None => {
            return Err(ReflowError::PageOutOfRange {
                requested: edited_page_number,
                first,
                last,
            }
            .into())
        }
    };

    let mut blocks = split_overflow(new_content, paper);
    if blocks.len() == 1 {
        let content = blocks.pop().unwrap_or_default();
        ordered[index].set_content(content);
    } else {
        debug!(
            page = edited_page_number,
            blocks = blocks.len(),
            %paper,
            "edited page overflowed, splitting"
        );
        let replacement = blocks.into_iter().map(|block| Page::new(0, block));
        ordered.splice(index..=index, replacement);
    }

    finish(&mut ordered, first, chapter_id)?;
    Ok(ordered)
}

/// Fuse adjacent pages while the fused page stays within the profile budget.
///
/// Blank pages are dropped first; if nothing is left the result is a single
/// empty page. Two pages are joined only when the joined content, separator
/// included, is at most `paper.max_chars()`, so compaction never creates an
/// overflowing page. The result is numbered from the list's first page number
/// and every page is tagged with `chapter_id`.
///
/// # Errors
///
/// [`crate::error::NumberingError`] when the list starts at page 0 or the
/// compacted pages cannot be numbered within `u32`.
pub fn merge_short_pages(
    pages: &[Page],
    paper: PaperSize,
    chapter_id: Uuid,
) -> Result<Vec<Page>> {
    let ordered = sorted(pages);
    let first = ordered.first().map(Page::page_number).unwrap_or(1);

    let contents: Vec<&str> = ordered
        .iter()
        .filter(|p| !p.is_blank())
        .map(Page::content)
        .collect();

    for chars in oversized(&contents, paper.max_chars()) {
        warn!(
            chars,
            budget = paper.max_chars(),
            %paper,
            "page already exceeds paper budget and is left unfused"
        );
    }

    let mut merged: Vec<Page> = pack_paragraphs(&contents, paper.max_chars())
        .into_iter()
        .map(|content| Page::new(0, content))
        .collect();

    if merged.is_empty() {
        merged.push(Page::empty(first));
    }

    debug!(
        before = pages.len(),
        after = merged.len(),
        %paper,
        "compacted short pages"
    );

    finish(&mut merged, first, chapter_id)?;
    Ok(merged)
}

fn sorted(pages: &[Page]) -> Vec<Page> {
    let mut ordered = pages.to_vec();
    ordered.sort_by_key(Page::page_number);
    ordered
}

fn finish(pages: &mut [Page], start: u32, chapter_id: Uuid) -> Result<()> {
    renumber(pages, start)?;
    for page in pages.iter_mut() {
        page.set_chapter_id(chapter_id);
    }
    Ok(())
}
