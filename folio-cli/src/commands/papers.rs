//! Papers command implementation

use anyhow::Result;
use folio_core::PaperSize;

/// List the available paper sizes
pub fn papers() -> Result<()> {
    println!("{:<8} {:>9} {:>9}", "NAME", "MAX CHARS", "MAX WORDS");
    for paper in PaperSize::ALL {
        println!(
            "{:<8} {:>9} {:>9}",
            paper.name(),
            paper.max_chars(),
            paper.max_words()
        );
    }
    Ok(())
}
