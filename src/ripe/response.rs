//! Typed deserialization of the RIPEstat country-resource-list response.
//!
//! The fields along `data.resources.ipv4` are all optional so a missing
//! link anywhere on the path reports as a malformed response instead of an
//! unstructured deserialization error.

use super::error::FetchError;
use serde::Deserialize;

/// Top level of the country-resource-list document.
#[derive(Deserialize, Debug, Default)]
pub struct CountryResourceList {
    pub data: Option<ResourceData>,
}

/// The `data` object.
#[derive(Deserialize, Debug, Default)]
pub struct ResourceData {
    pub resources: Option<Resources>,
}

/// The `data.resources` object.
#[derive(Deserialize, Debug, Default)]
pub struct Resources {
    pub ipv4: Option<Vec<String>>,
}

/// Extract the ordered list of IPv4 CIDR strings from a response body.
///
/// The entries are returned exactly as published, unvalidated; the
/// membership evaluator tolerates malformed entries.
pub fn extract_ipv4_prefixes(body: &str) -> Result<Vec<String>, FetchError> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let parsed: CountryResourceList = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| {
            FetchError::MalformedResponse(format!("JSON parse failed at {}: {}", e.path(), e))
        })?;

    parsed
        .data
        .and_then(|d| d.resources)
        .and_then(|r| r.ipv4)
        .ok_or_else(|| {
            FetchError::MalformedResponse("missing data.resources.ipv4 in response".to_string())
        })
}
