//! Command-line argument surface.

use clap::Parser;
use std::net::Ipv4Addr;

/// Check whether an IPv4 address falls inside the published RIPE CIDR list.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// IPv4 address to check, in dotted-decimal form
    pub ipv4: Ipv4Addr,
}
