//! Paper-size profiles used to decide when a page overflows

use crate::error::ProfileError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named character/word budget for a single page.
///
/// The set is closed: every profile the editor can select is a variant here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    /// ISO A4
    #[default]
    A4,

    /// ISO A5
    A5,

    /// ISO B5
    B5,

    /// US Letter
    Letter,

    /// Pocket novel format with a tighter budget
    Novel,
}

impl PaperSize {
    /// Every profile, in display order
    pub const ALL: [PaperSize; 5] = [
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::B5,
        PaperSize::Letter,
        PaperSize::Novel,
    ];

    /// Hard character budget for one page. Overflow splitting uses this.
    pub const fn max_chars(self) -> usize {
        match self {
            PaperSize::A4 => 1400,
            PaperSize::A5 => 900,
            PaperSize::B5 => 1100,
            PaperSize::Letter => 1500,
            PaperSize::Novel => 700,
        }
    }

    /// Soft word target, for display only. Never used for splitting.
    pub const fn max_words(self) -> usize {
        match self {
            PaperSize::A4 => 400,
            PaperSize::A5 => 260,
            PaperSize::B5 => 320,
            PaperSize::Letter => 430,
            PaperSize::Novel => 200,
        }
    }

    /// Lowercase profile name, as accepted by `FromStr`
    pub const fn name(self) -> &'static str {
        match self {
            PaperSize::A4 => "a4",
            PaperSize::A5 => "a5",
            PaperSize::B5 => "b5",
            PaperSize::Letter => "letter",
            PaperSize::Novel => "novel",
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperSize {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        PaperSize::ALL
            .into_iter()
            .find(|p| p.name() == lower)
            .ok_or_else(|| ProfileError::UnknownPaperSize(s.to_string()))
    }
}
