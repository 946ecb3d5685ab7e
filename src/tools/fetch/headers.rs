use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

use crate::tools::identity::FALLBACK_USER_AGENT;

/// Fixed language preference sent with every request.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Header map for one request: rotated identity + language preference.
pub(crate) fn headers_for_request(user_agent: &str, accept_language: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));

    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_str(accept_language)
            .unwrap_or(HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE)),
    );

    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent).unwrap_or(HeaderValue::from_static(FALLBACK_USER_AGENT)),
    );

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_identity_and_language() {
        let headers = headers_for_request("agent-x", DEFAULT_ACCEPT_LANGUAGE);
        assert_eq!(
            headers.get("user-agent").and_then(|v| v.to_str().ok()),
            Some("agent-x")
        );
        assert_eq!(
            headers.get("accept-language").and_then(|v| v.to_str().ok()),
            Some("en-US,en;q=0.9")
        );
        assert!(headers.contains_key("accept"));
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn invalid_values_fall_back() {
        let headers = headers_for_request("bad\nagent", "bad\nlang");
        assert_eq!(
            headers.get("user-agent").and_then(|v| v.to_str().ok()),
            Some(FALLBACK_USER_AGENT)
        );
        assert_eq!(
            headers.get("accept-language").and_then(|v| v.to_str().ok()),
            Some(DEFAULT_ACCEPT_LANGUAGE)
        );
    }
}
