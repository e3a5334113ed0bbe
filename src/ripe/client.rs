//! HTTP fetcher with bounded retries and timeouts.
//!
//! [`HttpFetcher`] performs a single GET; [`fetch_with_retry`] wraps any
//! [`Fetcher`] with the connection-phase retry policy.

use super::error::FetchError;
use super::response::extract_ipv4_prefixes;
use std::time::Duration;

/// Fixed RIPEstat endpoint for the US country resource list, v4 prefixes.
pub const RIPE_URL: &str =
    "https://stat.ripe.net/data/country-resource-list/data.json?resource=US&v4_format=prefix";

/// Maximum time allowed to establish a connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum time allowed for the whole request, bounding the read phase.
pub const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Total connection attempts before giving up.
pub const MAX_ATTEMPTS: u32 = 3;

/// A single-attempt HTTP GET returning the response body.
pub trait Fetcher {
    /// Fetch `url` once, classifying any failure.
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP client with connect and read timeouts applied.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the default timeouts.
    pub fn new() -> Result<HttpFetcher, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(READ_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Connection(format!("Failed to build HTTP client: {e}")))?;
        Ok(HttpFetcher { client })
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(FetchError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("request failed with status {status}");
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        response.text().map_err(FetchError::from_transport)
    }
}

/// Fetch `url`, retrying connection failures up to [`MAX_ATTEMPTS`] times.
///
/// Only [`FetchError::Connection`] is retried; timeouts, HTTP status errors
/// and malformed bodies surface immediately.
pub fn fetch_with_retry(fetcher: &impl Fetcher, url: &str) -> Result<String, FetchError> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        match fetcher.get(url) {
            Ok(body) => return Ok(body),
            Err(FetchError::Connection(msg)) if attempt < MAX_ATTEMPTS => {
                log::warn!("connection attempt {attempt}/{MAX_ATTEMPTS} failed: {msg}");
            }
            Err(e) => return Err(e),
        }
    }
}

/// Fetch the published IPv4 CIDR list from the fixed RIPEstat endpoint.
///
/// Applies the connection retry policy, then extracts the ordered prefix
/// list from the JSON body. The strings are returned unmodified.
pub fn get_cidr_ranges(fetcher: &impl Fetcher) -> Result<Vec<String>, FetchError> {
    log::info!("requesting CIDR list from {RIPE_URL}");
    let body = fetch_with_retry(fetcher, RIPE_URL)?;
    let ranges = extract_ipv4_prefixes(&body)?;
    log::info!("received {} CIDR entries", ranges.len());
    Ok(ranges)
}
