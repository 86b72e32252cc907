//! Chapter merging: ordered page list back to flat chapter text

use crate::split::PARAGRAPH_SEPARATOR;
use crate::types::Page;

/// Join pages in page-number order, skipping blank pages.
///
/// The inverse of [`crate::split::split_chapter`] for text without manual
/// breaks whose paragraphs are separated by exactly [`PARAGRAPH_SEPARATOR`].
/// Other paragraph breaks (longer newline runs, CRLF blank lines, blank
/// paragraphs) come back as a single [`PARAGRAPH_SEPARATOR`].
pub fn merge_pages(pages: &[Page]) -> String {
    let mut ordered: Vec<&Page> = pages.iter().filter(|p| !p.is_blank()).collect();
    ordered.sort_by_key(|p| p.page_number());

    ordered
        .iter()
        .map(|p| p.content())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}
