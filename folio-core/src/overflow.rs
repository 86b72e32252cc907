//! Overflow detection and resolution against a paper-size profile

use crate::measure::count_chars;
use crate::split::{pack_paragraphs, split_paragraphs, warn_oversized};
use crate::types::PaperSize;
use serde::{Deserialize, Serialize};

/// Result of checking one page's content against a profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverflowReport {
    /// Whether the content exceeds the budget
    pub is_overflow: bool,

    /// Characters in the content
    pub char_count: usize,

    /// The profile's budget
    pub max_chars: usize,

    /// Characters past the budget, zero when the content fits
    pub overflow_amount: usize,
}

/// Check `content` against the profile's character budget.
///
/// Content of exactly `max_chars` characters fits.
pub fn check_overflow(content: &str, paper: PaperSize) -> OverflowReport {
    let char_count = count_chars(content);
    let max_chars = paper.max_chars();
    let overflow_amount = char_count.saturating_sub(max_chars);

    OverflowReport {
        is_overflow: overflow_amount > 0,
        char_count,
        max_chars,
        overflow_amount,
    }
}

/// Split overflowing content into page-sized blocks.
///
/// Content that fits is returned unchanged as a single block. Otherwise
/// paragraphs are packed under the profile's budget, so splits always fall on
/// paragraph boundaries; a paragraph larger than the budget stays one
/// oversized block. Never returns an empty list: content made only of
/// whitespace resolves to a single empty block.
pub fn split_overflow(content: &str, paper: PaperSize) -> Vec<String> {
    if !check_overflow(content, paper).is_overflow {
        return vec![content.to_string()];
    }

    let paragraphs = split_paragraphs(content);
    warn_oversized(&paragraphs, paper.max_chars());
    let blocks = pack_paragraphs(&paragraphs, paper.max_chars());
    if blocks.is_empty() {
        return vec![String::new()];
    }
    blocks
}
