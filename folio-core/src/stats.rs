//! Aggregate statistics over a chapter's page list

use crate::measure::count_chars;
use crate::overflow::check_overflow;
use crate::status::PageStatus;
use crate::types::{Page, PaperSize};
use serde::{Deserialize, Serialize};

/// Summary of a page list, derived entirely from page contents
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChapterStats {
    pub page_count: usize,
    pub total_words: usize,
    pub total_chars: usize,
    pub empty_pages: usize,
    pub draft_pages: usize,
    pub complete_pages: usize,

    /// Page numbers over budget; only filled by [`ChapterStats::with_paper`]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overflowing_pages: Vec<u32>,
}

impl ChapterStats {
    pub fn from_pages(pages: &[Page]) -> Self {
        let mut stats = ChapterStats {
            page_count: pages.len(),
            ..Default::default()
        };

        for page in pages {
            stats.total_words += page.word_count();
            stats.total_chars += count_chars(page.content());
            match page.status() {
                PageStatus::Empty => stats.empty_pages += 1,
                PageStatus::Draft => stats.draft_pages += 1,
                PageStatus::Complete => stats.complete_pages += 1,
            }
        }

        stats
    }

    /// Also record which pages overflow `paper`
    pub fn with_paper(mut self, pages: &[Page], paper: PaperSize) -> Self {
        let mut overflowing: Vec<u32> = pages
            .iter()
            .filter(|p| check_overflow(p.content(), paper).is_overflow)
            .map(Page::page_number)
            .collect();
        overflowing.sort_unstable();
        self.overflowing_pages = overflowing;
        self
    }

    /// Fraction of pages marked complete, 0.0 for an empty list
    pub fn completion_ratio(&self) -> f64 {
        if self.page_count == 0 {
            return 0.0;
        }
        self.complete_pages as f64 / self.page_count as f64
    }
}
