//! Check an IPv4 address against the RIPEstat country CIDR list.
//!
//! Three sequential stages: parse the address from the command line, fetch
//! the published IPv4 prefix list, scan the list for a containing range.

pub mod check;
pub mod cli;
pub mod models;
pub mod output;
pub mod ripe;

use check::Verdict;
use ripe::{FetchError, Fetcher, HttpFetcher};
use std::net::Ipv4Addr;

/// Run the check against an injected fetcher.
///
/// Retrieval failures are terminal; no partial verdict is produced
/// without the full range list.
pub fn check_address(addr: Ipv4Addr, fetcher: &impl Fetcher) -> Result<Verdict, FetchError> {
    let ranges = ripe::get_cidr_ranges(fetcher)?;
    log::info!("checking {addr} against {} ranges", ranges.len());
    Ok(check::check_ipv4_in_ranges(addr, &ranges))
}

/// Run the check against the live RIPEstat endpoint.
pub fn run_check(addr: Ipv4Addr) -> Result<Verdict, FetchError> {
    let fetcher = HttpFetcher::new()?;
    check_address(addr, &fetcher)
}
