//! Folio Core Library
//!
//! The pagination and reflow engine behind the chapter editor. A chapter's
//! flat text is split into fixed-capacity pages, kept consistent as single
//! pages are edited under a paper-size profile, and merged back into flat
//! text on save.
//!
//! Every operation is a pure, synchronous transform: it takes a page list (or
//! text) and returns a new value. Storage, debouncing and markup handling at
//! the editing surface belong to the caller.

pub mod error;
pub mod markup;
pub mod measure;
pub mod merge;
pub mod overflow;
pub mod reflow;
pub mod split;
pub mod stats;
pub mod status;
pub mod types;

pub use error::{FolioError, NumberingError, ProfileError, ReflowError, Result};
pub use markup::strip_markup;
pub use measure::{count_chars, count_words};
pub use merge::merge_pages;
pub use overflow::{check_overflow, split_overflow, OverflowReport};
pub use reflow::{merge_short_pages, redistribute};
pub use split::{split_chapter, PAGE_BREAK_MARKER, PARAGRAPH_SEPARATOR, SPLIT_BUDGET_CHARS};
pub use stats::ChapterStats;
pub use status::{classify, PageStatus, COMPLETE_RATIO, TARGET_WORDS_PER_PAGE};
pub use types::{Page, PaperSize};
