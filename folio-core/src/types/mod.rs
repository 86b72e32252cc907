//! Core types for the Folio pagination engine

mod page;
mod paper;

pub(crate) use page::renumber;
pub use page::Page;
pub use paper::PaperSize;
