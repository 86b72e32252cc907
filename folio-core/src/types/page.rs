//! Page type: one fixed-position unit of a chapter's content

use crate::error::NumberingError;
use crate::measure::count_words;
use crate::status::{classify_word_count, PageStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single page of a chapter.
///
/// `status` and `word_count` are derived from `content` and are recomputed on
/// every construction or content change, so they can never disagree with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "PageRecord")]
pub struct Page {
    page_number: u32,
    content: String,
    status: PageStatus,
    word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    chapter_id: Option<Uuid>,
}

/// Authored fields of a page; derived fields are rebuilt on deserialization
#[derive(Deserialize)]
struct PageRecord {
    page_number: u32,
    #[serde(default)]
    content: String,
    #[serde(default)]
    chapter_id: Option<Uuid>,
}

impl From<PageRecord> for Page {
    fn from(record: PageRecord) -> Self {
        let mut page = Page::new(record.page_number, record.content);
        page.chapter_id = record.chapter_id;
        page
    }
}

impl Page {
    /// Create a page and measure its content
    pub fn new(page_number: u32, content: impl Into<String>) -> Self {
        let content = content.into();
        let word_count = count_words(&content);
        Self {
            page_number,
            content,
            status: classify_word_count(word_count),
            word_count,
            chapter_id: None,
        }
    }

    /// Create a page with no content
    pub fn empty(page_number: u32) -> Self {
        Self::new(page_number, String::new())
    }

    /// Tag the page with the chapter it belongs to
    pub fn with_chapter(mut self, chapter_id: Uuid) -> Self {
        self.chapter_id = Some(chapter_id);
        self
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn status(&self) -> PageStatus {
        self.status
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn chapter_id(&self) -> Option<Uuid> {
        self.chapter_id
    }

    /// Whether the page has no visible content
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Replace the content and re-derive word count and status
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.word_count = count_words(&self.content);
        self.status = classify_word_count(self.word_count);
    }

    pub(crate) fn set_page_number(&mut self, page_number: u32) {
        self.page_number = page_number;
    }

    pub(crate) fn set_chapter_id(&mut self, chapter_id: Uuid) {
        self.chapter_id = Some(chapter_id);
    }
}

/// Renumber pages in slice order, starting at `start`.
///
/// Fails without touching the pages when `start` is 0 or the last page
/// number would not fit in a `u32`.
pub(crate) fn renumber(pages: &mut [Page], start: u32) -> Result<(), NumberingError> {
    if start == 0 {
        return Err(NumberingError::ZeroStart);
    }
    let last_offset = pages.len().saturating_sub(1);
    let fits = u32::try_from(last_offset)
        .ok()
        .and_then(|offset| start.checked_add(offset))
        .is_some();
    if !fits {
        return Err(NumberingError::Exhausted {
            start,
            pages: pages.len(),
        });
    }

    for (number, page) in (start..=u32::MAX).zip(pages.iter_mut()) {
        page.set_page_number(number);
    }
    Ok(())
}
