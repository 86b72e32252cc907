//! CLI command implementations

mod batch;
mod input;
mod measure;
mod merge;
mod overflow;
mod papers;
mod reflow;
mod split;
mod stats;

pub use batch::batch;
pub use measure::measure;
pub use merge::merge;
pub use overflow::overflow;
pub use papers::papers;
pub use reflow::{compact, reflow};
pub use split::split;
pub use stats::stats;
