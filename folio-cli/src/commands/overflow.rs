//! Overflow command implementation

use super::input::read_text;
use anyhow::Result;
use folio_core::{check_overflow, split_overflow, OverflowReport, PaperSize};
use serde::Serialize;

#[derive(Serialize)]
struct OverflowOutput {
    paper: PaperSize,
    #[serde(flatten)]
    report: OverflowReport,
    blocks: Vec<String>,
}

/// Check whether a page's content overflows a paper size
pub fn overflow(input: &str, paper: PaperSize, json: bool) -> Result<()> {
    let content = read_text(input)?;
    let report = check_overflow(&content, paper);
    let blocks = split_overflow(&content, paper);

    if json {
        let output = OverflowOutput {
            paper,
            report,
            blocks,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Paper:    {} ({} chars)", paper, report.max_chars);
    println!("Chars:    {}", report.char_count);
    if report.is_overflow {
        println!("Overflow: {} chars over", report.overflow_amount);
        println!("Splits into {} pages", blocks.len());
    } else {
        println!("Overflow: none");
    }

    Ok(())
}
