//! RIPEstat data retrieval.
//!
//! This module handles the one outbound call of the program:
//! - [`client`] - HTTP GET with timeouts and connection retries
//! - [`response`] - typed extraction of `data.resources.ipv4`
//! - [`error`] - the failure taxonomy for this stage

mod client;
mod error;
mod response;

// Re-export public types and functions
pub use client::{fetch_with_retry, get_cidr_ranges, Fetcher, HttpFetcher, MAX_ATTEMPTS, RIPE_URL};
pub use error::FetchError;
pub use response::extract_ipv4_prefixes;
