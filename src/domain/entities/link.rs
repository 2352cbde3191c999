//! Link entity representing a shortened URL mapping.

/// A short code and the destination it redirects to.
///
/// Destinations are stored verbatim; nothing checks that they are URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
}

impl Link {
    pub fn new(code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            long_url: long_url.into(),
        }
    }

    /// Builds the public short URL for this link under `base_url`.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url() {
        let link = Link::new("aB3xY9", "https://example.com");
        assert_eq!(
            link.short_url("http://localhost:8080"),
            "http://localhost:8080/aB3xY9"
        );
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let link = Link::new("aB3xY9", "https://example.com");
        assert_eq!(
            link.short_url("http://localhost:8080/"),
            "http://localhost:8080/aB3xY9"
        );
    }
}
