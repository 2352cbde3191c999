//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// A missing `url` field deserializes to an empty string and is then
/// rejected by validation. `URL` and `Url` are accepted as the field name too.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The destination to shorten. Stored verbatim.
    #[serde(default, alias = "URL", alias = "Url")]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}

/// Response carrying the public short URL.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_defaults_to_empty() {
        let req: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.url, "");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_uppercase_field_name() {
        let req: ShortenRequest =
            serde_json::from_str(r#"{"URL":"https://example.com"}"#).unwrap();
        assert_eq!(req.url, "https://example.com");

        let req: ShortenRequest =
            serde_json::from_str(r#"{"Url":"https://example.com"}"#).unwrap();
        assert_eq!(req.url, "https://example.com");
    }

    #[test]
    fn test_non_empty_url_is_valid() {
        let req: ShortenRequest = serde_json::from_str(r#"{"url":"not even a url"}"#).unwrap();
        assert!(req.validate().is_ok());
    }
}
