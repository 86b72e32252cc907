//! Stats command implementation

use super::input::read_pages;
use anyhow::Result;
use folio_core::{ChapterStats, PaperSize};

/// Display statistics about a page list
pub fn stats(pages_path: &str, paper: Option<PaperSize>, json: bool) -> Result<()> {
    let pages = read_pages(pages_path)?;

    let mut stats = ChapterStats::from_pages(&pages);
    if let Some(paper) = paper {
        stats = stats.with_paper(&pages, paper);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Pages:     {}", stats.page_count);
    println!("Words:     {}", stats.total_words);
    println!("Chars:     {}", stats.total_chars);
    println!(
        "Status:    {} complete, {} draft, {} empty",
        stats.complete_pages, stats.draft_pages, stats.empty_pages
    );
    println!("Progress:  {:.0}%", stats.completion_ratio() * 100.0);
    if let Some(paper) = paper {
        if stats.overflowing_pages.is_empty() {
            println!("Overflow:  none on {}", paper);
        } else {
            let numbers: Vec<String> = stats
                .overflowing_pages
                .iter()
                .map(|n| n.to_string())
                .collect();
            println!("Overflow:  pages {} on {}", numbers.join(", "), paper);
        }
    }

    Ok(())
}
