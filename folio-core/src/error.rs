//! Error types for Folio Core

use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

/// Top-level error type for all Folio operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FolioError {
    #[error("Reflow error: {0}")]
    Reflow(#[from] ReflowError),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Numbering error: {0}")]
    Numbering(#[from] NumberingError),
}

/// Caller contract violations raised while reflowing a page list
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReflowError {
    #[error("Page {requested} is out of range: chapter has pages {first} to {last}")]
    PageOutOfRange { requested: u32, first: u32, last: u32 },
}

/// A page list cannot be numbered from the requested start
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumberingError {
    #[error("Page numbers start at 1, got 0")]
    ZeroStart,

    #[error("Cannot number {pages} pages from {start} without exceeding {max}", max = u32::MAX)]
    Exhausted { start: u32, pages: usize },
}

/// Errors that occur while resolving a paper-size profile
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Unknown paper size: {0}")]
    UnknownPaperSize(String),
}
