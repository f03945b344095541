//! RIPEstat response envelope.
//!
//! Only `data.resources.ipv4` is read; the rest of the body is ignored.

use crate::error::CheckError;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Envelope {
    pub data: EnvelopeData,
}

#[derive(Deserialize, Debug)]
pub struct EnvelopeData {
    pub resources: Resources,
}

#[derive(Deserialize, Debug)]
pub struct Resources {
    /// IPv4 prefixes, `a.b.c.d/n`, in response order.
    pub ipv4: Vec<String>,
}

/// Decode a response body and pull out the IPv4 prefix list.
///
/// # Returns
/// * `Ok(Vec<String>)` - The prefixes in response order
/// * `Err(CheckError::ProviderError)` - Body is not JSON
/// * `Err(CheckError::DataError)` - JSON lacks `data.resources.ipv4` as a list of strings
pub fn parse_envelope(body: &str) -> Result<Vec<String>, CheckError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        log::warn!("Response body is not JSON: {e}");
        log::trace!("BODY START:\n\n{body}\n\nBODY END\n");
        CheckError::ProviderError {
            detail: format!("undecodable response body: {e}"),
        }
    })?;
    prefixes_from_value(value)
}

/// Pull the IPv4 prefix list out of an already decoded envelope.
fn prefixes_from_value(value: serde_json::Value) -> Result<Vec<String>, CheckError> {
    let envelope: Envelope = serde_path_to_error::deserialize(value).map_err(|e| {
        let detail = format!("path={} error={}", e.path(), e.inner());
        log::warn!("Unexpected response envelope: {detail}");
        CheckError::DataError { detail }
    })?;
    Ok(envelope.data.resources.ipv4)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_RESPONSE: &str = "src/tests/test_data/ripe_us_sample.json";

    #[test]
    fn test_parse_sample_response() {
        let body = std::fs::read_to_string(TEST_RESPONSE).expect("Error reading test response");
        let prefixes = parse_envelope(&body).expect("Error parsing test response");
        assert_eq!(prefixes.len(), 10, "Expected 10 prefixes in {TEST_RESPONSE}");
        assert_eq!(prefixes[0], "2.57.248.0/22");
        assert_eq!(prefixes[4], "3.0.0.0/9");
    }

    #[test]
    fn test_missing_ipv4_is_data_error() {
        let err = parse_envelope(r#"{"data":{"resources":{}}}"#).unwrap_err();
        assert!(matches!(err, CheckError::DataError { .. }));
        assert!(err.detail().unwrap().contains("data.resources"));
    }

    #[test]
    fn test_wrong_shapes_are_data_errors() {
        for body in [
            r#"{}"#,
            r#"{"data":null}"#,
            r#"{"data":{"resources":{"ipv4":"3.0.0.0/9"}}}"#,
            r#"{"data":{"resources":{"ipv4":[3]}}}"#,
            r#"[]"#,
        ] {
            assert!(
                matches!(parse_envelope(body), Err(CheckError::DataError { .. })),
                "{body} should be a DataError"
            );
        }
    }

    #[test]
    fn test_not_json_is_provider_error() {
        let err = parse_envelope("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CheckError::ProviderError { .. }));
        assert_eq!(err.to_string(), "Error making API call");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let body = r#"{"status":"ok","data":{"resources":{"asn":["7"],"ipv4":["3.0.0.0/9"],"ipv6":[]},"query_time":"2026-10-15T00:00:00"}}"#;
        assert_eq!(parse_envelope(body).unwrap(), vec!["3.0.0.0/9"]);
    }
}
