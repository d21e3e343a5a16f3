use std::collections::BTreeMap;
use std::fmt;

pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// API credential held by the brain.
///
/// Only ever formatted into request headers; nothing in this crate sends it.
#[derive(Clone, Default)]
pub struct Credentials {
    token: Option<String>,
}

impl Credentials {
    pub fn new(token: Option<String>) -> Self {
        // Blank values from an empty env var count as absent.
        let token = token.filter(|t| !t.trim().is_empty());
        Self { token }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Header mapping for authenticated requests: `Authorization: token <value>`.
    /// Empty when no token is configured.
    pub fn headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        if let Some(token) = &self.token {
            headers.insert(AUTHORIZATION_HEADER.to_string(), format!("token {token}"));
        }
        headers
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_use_token_scheme() {
        let creds = Credentials::new(Some("ghp_abc123".to_string()));
        let headers = creds.headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[AUTHORIZATION_HEADER], "token ghp_abc123");
    }

    #[test]
    fn anonymous_has_no_headers() {
        assert!(Credentials::anonymous().headers().is_empty());
        assert!(!Credentials::new(None).has_token());
    }

    #[test]
    fn blank_token_is_treated_as_absent() {
        let creds = Credentials::new(Some("  ".to_string()));
        assert!(!creds.has_token());
        assert!(creds.headers().is_empty());
    }

    #[test]
    fn debug_redacts_token() {
        let creds = Credentials::new(Some("ghp_secret".to_string()));
        let debug = format!("{creds:?}");
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("<redacted>"));
    }
}
