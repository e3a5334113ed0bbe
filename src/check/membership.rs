//! Membership scan over the retrieved range list.

use crate::models::Cidr;
use std::net::Ipv4Addr;

/// Outcome of checking one address against the range list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The address falls inside this range (first match in list order).
    Matched(Cidr),
    /// No successfully-parsed range contains the address.
    NotMatched,
}

impl Verdict {
    /// True when the address matched a range.
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Matched(_))
    }
}

/// Check whether an IPv4 address falls inside any of the given CIDR ranges.
///
/// Entries are scanned in list order and the first match wins. An entry
/// that fails to parse as a CIDR is skipped, never fatal; a list with no
/// valid entries simply yields [`Verdict::NotMatched`].
pub fn check_ipv4_in_ranges(addr: Ipv4Addr, ranges: &[String]) -> Verdict {
    for entry in ranges {
        let cidr = match entry.parse::<Cidr>() {
            Ok(cidr) => cidr,
            Err(e) => {
                log::debug!("skipping malformed CIDR entry '{entry}': {e}");
                continue;
            }
        };
        if cidr.contains(addr) {
            return Verdict::Matched(cidr);
        }
    }
    Verdict::NotMatched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_address_in_single_range() {
        let verdict = check_ipv4_in_ranges("2.56.8.10".parse().unwrap(), &ranges(&["2.56.8.0/24"]));
        assert_eq!(
            verdict,
            Verdict::Matched(Cidr::new("2.56.8.0/24").unwrap())
        );
    }

    #[test]
    fn test_address_not_in_range() {
        let verdict = check_ipv4_in_ranges(
            "172.31.1.100".parse().unwrap(),
            &ranges(&["223.165.112.0/20"]),
        );
        assert_eq!(verdict, Verdict::NotMatched);
        assert!(!verdict.is_match());
    }

    #[test]
    fn test_first_match_wins() {
        let verdict = check_ipv4_in_ranges(
            "11.11.11.11".parse().unwrap(),
            &ranges(&["11.0.0.0/8", "9.9.9.0/24"]),
        );
        assert_eq!(verdict, Verdict::Matched(Cidr::new("11.0.0.0/8").unwrap()));
    }

    #[test]
    fn test_first_match_wins_when_both_contain() {
        // Both ranges contain the address; list order decides which is reported
        let verdict = check_ipv4_in_ranges(
            "10.1.2.3".parse().unwrap(),
            &ranges(&["10.1.0.0/16", "10.0.0.0/8"]),
        );
        assert_eq!(verdict, Verdict::Matched(Cidr::new("10.1.0.0/16").unwrap()));
    }

    #[test]
    fn test_adjacent_range_not_matched() {
        let verdict = check_ipv4_in_ranges(
            "168.68.255.255".parse().unwrap(),
            &ranges(&["168.67.0.0/16"]),
        );
        assert_eq!(verdict, Verdict::NotMatched);
    }

    #[test]
    fn test_empty_range_list() {
        let verdict = check_ipv4_in_ranges("8.8.8.8".parse().unwrap(), &[]);
        assert_eq!(verdict, Verdict::NotMatched);
    }

    #[test]
    fn test_malformed_entry_is_skipped() {
        let verdict = check_ipv4_in_ranges(
            "9.9.9.9".parse().unwrap(),
            &ranges(&["not-a-cidr", "300.0.0.0/8", "9.9.9.0/33", "9.9.9.0/24"]),
        );
        assert_eq!(verdict, Verdict::Matched(Cidr::new("9.9.9.0/24").unwrap()));
    }

    #[test]
    fn test_all_entries_malformed() {
        let verdict = check_ipv4_in_ranges(
            "9.9.9.9".parse().unwrap(),
            &ranges(&["not-a-cidr", "garbage/entry"]),
        );
        assert_eq!(verdict, Verdict::NotMatched);
    }

    #[test]
    fn test_universal_range_matches_anything() {
        let verdict = check_ipv4_in_ranges("203.0.113.7".parse().unwrap(), &ranges(&["0.0.0.0/0"]));
        assert_eq!(verdict, Verdict::Matched(Cidr::new("0.0.0.0/0").unwrap()));
    }

    #[test]
    fn test_exact_host_range() {
        let list = ranges(&["203.0.113.7/32"]);
        assert!(check_ipv4_in_ranges("203.0.113.7".parse().unwrap(), &list).is_match());
        assert!(!check_ipv4_in_ranges("203.0.113.8".parse().unwrap(), &list).is_match());
    }
}
