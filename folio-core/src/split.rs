//! Chapter splitting: flat chapter text to an ordered page list
//!
//! Two paths, checked in order:
//! 1. Manual breaks. If the text contains [`PAGE_BREAK_MARKER`], every
//!    segment between markers becomes exactly one page, however long it is.
//! 2. Paragraph packing. Paragraphs are packed greedily into pages of at most
//!    [`SPLIT_BUDGET_CHARS`] characters.
//!
//! The load-time budget is paper-size agnostic. Profile-specific overflow is
//! resolved later, per edit, by [`crate::overflow`]. The two budgets differ on
//! purpose: unifying them would change page counts between load and edit.

use crate::error::Result;
use crate::measure::count_chars;
use crate::types::{renumber, Page};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Reserved token that forces a page boundary
pub const PAGE_BREAK_MARKER: &str = "---pagebreak---";

/// Character budget for packing paragraphs at chapter load
pub const SPLIT_BUDGET_CHARS: usize = 2000;

/// Separator placed between paragraphs and between merged pages
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

const SEPARATOR_CHARS: usize = PARAGRAPH_SEPARATOR.len();

static PARAGRAPH_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n){2,}").expect("valid regex"));

/// Split chapter text into pages numbered from `start_page_number`.
///
/// Never returns an empty list.
///
/// # Errors
///
/// [`crate::error::NumberingError`] when `start_page_number` is 0 or the last page number
/// would exceed `u32::MAX`.
pub fn split_chapter(text: &str, start_page_number: u32) -> Result<Vec<Page>> {
    let blocks: Vec<String> = if text.trim().is_empty() {
        Vec::new()
    } else if text.contains(PAGE_BREAK_MARKER) {
        let segments: Vec<String> = text
            .split(PAGE_BREAK_MARKER)
            .map(|segment| segment.trim().to_string())
            .collect();
        debug!(pages = segments.len(), "splitting chapter on manual breaks");
        segments
    } else {
        let paragraphs = split_paragraphs(text);
        warn_oversized(&paragraphs, SPLIT_BUDGET_CHARS);
        let blocks = pack_paragraphs(&paragraphs, SPLIT_BUDGET_CHARS);
        debug!(pages = blocks.len(), "packed chapter paragraphs into pages");
        blocks
    };

    let mut pages: Vec<Page> = blocks
        .into_iter()
        .map(|content| Page::new(0, content))
        .collect();
    if pages.is_empty() {
        pages.push(Page::empty(0));
    }

    renumber(&mut pages, start_page_number)?;
    Ok(pages)
}

/// Split on runs of two or more newlines, dropping whitespace-only paragraphs
pub(crate) fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK_RE
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect()
}

/// Greedily pack paragraphs into blocks of at most `budget` characters,
/// separator included.
///
/// A paragraph that would push a non-empty block over budget starts a new
/// block. A single paragraph longer than `budget` is emitted as one oversized
/// block; there is no sentence- or character-level fallback. Blocks are
/// trimmed and empty blocks are dropped.
pub(crate) fn pack_paragraphs(paragraphs: &[&str], budget: usize) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut buffer = String::new();
    let mut buffer_chars = 0usize;

    for paragraph in paragraphs {
        let paragraph_chars = count_chars(paragraph);
        if !buffer.is_empty() && buffer_chars + SEPARATOR_CHARS + paragraph_chars > budget {
            push_block(&mut blocks, &buffer);
            buffer.clear();
            buffer_chars = 0;
        }

        if !buffer.is_empty() {
            buffer.push_str(PARAGRAPH_SEPARATOR);
            buffer_chars += SEPARATOR_CHARS;
        }
        buffer.push_str(paragraph);
        buffer_chars += paragraph_chars;
    }

    push_block(&mut blocks, &buffer);
    blocks
}

/// Character counts of the items that exceed `budget` on their own
pub(crate) fn oversized(items: &[&str], budget: usize) -> Vec<usize> {
    items
        .iter()
        .map(|item| count_chars(item))
        .filter(|&chars| chars > budget)
        .collect()
}

/// Log every paragraph that packing will keep as an oversized block
pub(crate) fn warn_oversized(paragraphs: &[&str], budget: usize) {
    for chars in oversized(paragraphs, budget) {
        warn!(chars, budget, "paragraph exceeds page budget and will not be split");
    }
}

fn push_block(blocks: &mut Vec<String>, buffer: &str) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed.to_string());
    }
}
