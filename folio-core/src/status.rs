//! Page lifecycle status derived from content

use crate::measure::count_words;
use serde::{Deserialize, Serialize};

/// Word target for the progress indicator.
///
/// Independent of [`PaperSize::max_words`](crate::PaperSize::max_words): the
/// draft/complete boundary does not move when the user switches profiles.
pub const TARGET_WORDS_PER_PAGE: usize = 300;

/// Fraction of [`TARGET_WORDS_PER_PAGE`] at which a page is complete
pub const COMPLETE_RATIO: f64 = 0.8;

/// Display state of a page. Not a ratchet: editing can move a page backward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    #[default]
    Empty,
    Draft,
    Complete,
}

/// Classify page content by its word count
pub fn classify(content: &str) -> PageStatus {
    classify_word_count(count_words(content))
}

/// Classify an already measured word count
pub fn classify_word_count(words: usize) -> PageStatus {
    if words == 0 {
        PageStatus::Empty
    } else if words as f64 >= COMPLETE_RATIO * TARGET_WORDS_PER_PAGE as f64 {
        PageStatus::Complete
    } else {
        PageStatus::Draft
    }
}
