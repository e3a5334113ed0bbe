//! Output formatting.
//!
//! - [`terminal`] - colored verdict line for the terminal

mod terminal;

pub use terminal::format_verdict;
