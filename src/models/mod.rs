//! Domain models for the IP range check.
//!
//! - [`Cidr`] - IPv4 network range in CIDR notation
//! - [`prefix_mask`] - prefix-length to subnet-mask conversion

mod cidr;

// Re-export public types
pub use cidr::{prefix_mask, Cidr, MAX_PREFIX};
