//! Membership evaluation logic.
//!
//! - [`membership`] - first-match scan of the address over the range list

mod membership;

// Re-export public functions
pub use membership::{check_ipv4_in_ranges, Verdict};
