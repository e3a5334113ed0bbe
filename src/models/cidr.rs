//! IPv4 CIDR range type and prefix-mask math.
//!
//! Provides [`Cidr`] for representing a network range in `A.B.C.D/N` notation,
//! along with the mask arithmetic used by the membership check.

use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum prefix length for an IPv4 CIDR range (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// The top `len` bits are set. `len == 0` yields an all-zero mask
/// (the universal range), `len == 32` yields an all-ones mask.
///
/// # Examples
/// ```
/// use ripe_ip_check::models::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_PREFIX {
        Err("Prefix length is too long".into())
    } else {
        let right_len = MAX_PREFIX - len;
        let all_bits = u32::MAX as u64;

        // Widen to u64 so a shift by 32 (len == 0) is defined.
        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// An IPv4 CIDR range: network address plus prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The network address of the range.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Cidr {
    /// Parse a CIDR string (e.g., "2.56.8.0/24").
    pub fn new(cidr: &str) -> Result<Cidr, Box<dyn Error>> {
        let cidr = cidr.trim();
        let parts: Vec<&str> = cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(format!("Invalid CIDR format: {cidr}").into());
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| format!("Invalid IP address: {}", parts[0]))?;
        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| format!("Invalid prefix length: {}", parts[1]))?;
        if prefix > MAX_PREFIX {
            return Err("Prefix length is too long".into());
        }
        Ok(Cidr { addr, prefix })
    }

    /// Check whether an IP address falls inside this range.
    ///
    /// Both sides are masked to the prefix, so an entry carrying host bits
    /// behaves as its containing network.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        let mask = match prefix_mask(self.prefix) {
            Ok(m) => m,
            Err(_) => return false,
        };
        (u32::from(ip) & mask) == (u32::from(self.addr) & mask)
    }

    /// The network address with host bits cleared.
    pub fn network(&self) -> Ipv4Addr {
        match prefix_mask(self.prefix) {
            Ok(mask) => Ipv4Addr::from(u32::from(self.addr) & mask),
            Err(_) => self.addr,
        }
    }
}

impl FromStr for Cidr {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Cidr, Self::Err> {
        Cidr::new(s)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
