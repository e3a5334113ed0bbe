//! Terminal output for verdict and status lines.

use crate::check::Verdict;
use colored::Colorize;
use std::net::Ipv4Addr;

/// Format the single verdict line for standard output.
///
/// PASS is green and names the matched range, Fail is red.
pub fn format_verdict(addr: Ipv4Addr, verdict: &Verdict) -> String {
    match verdict {
        Verdict::Matched(cidr) => format!(
            "{}  The provided IP {addr} is in the CIDR range {cidr}.",
            "PASS!".green().bold()
        ),
        Verdict::NotMatched => format!(
            "{}  The provided IP {addr} is NOT in any of the CIDR ranges.",
            "Fail.".red().bold()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cidr;

    #[test]
    fn test_format_verdict_matched() {
        colored::control::set_override(false);
        let verdict = Verdict::Matched(Cidr::new("2.56.8.0/24").unwrap());
        let line = format_verdict("2.56.8.10".parse().unwrap(), &verdict);
        assert_eq!(
            line,
            "PASS!  The provided IP 2.56.8.10 is in the CIDR range 2.56.8.0/24."
        );
    }

    #[test]
    fn test_format_verdict_not_matched() {
        colored::control::set_override(false);
        let line = format_verdict("172.31.1.100".parse().unwrap(), &Verdict::NotMatched);
        assert_eq!(
            line,
            "Fail.  The provided IP 172.31.1.100 is NOT in any of the CIDR ranges."
        );
    }
}
