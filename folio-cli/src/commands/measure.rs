//! Measure command implementation

use super::input::read_text;
use anyhow::Result;
use folio_core::{classify, count_chars, count_words, strip_markup, PageStatus};
use serde::Serialize;

/// Measurement output
#[derive(Serialize)]
struct Measurement {
    words: usize,
    chars: usize,
    status: PageStatus,
}

/// Count words and characters in a text
pub fn measure(input: &str, strip: bool, json: bool) -> Result<()> {
    let raw = read_text(input)?;
    let text = if strip { strip_markup(&raw) } else { raw };

    let measurement = Measurement {
        words: count_words(&text),
        chars: count_chars(&text),
        status: classify(&text),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&measurement)?);
    } else {
        println!("Words:  {}", measurement.words);
        println!("Chars:  {}", measurement.chars);
        println!("Status: {:?}", measurement.status);
    }

    Ok(())
}
