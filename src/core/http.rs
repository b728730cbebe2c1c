//! HTTP utilities for game API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;

pub const USER_AGENT: &str = concat!("clash-inviter/", env!("CARGO_PKG_VERSION"));

/// Build the default headers every API request carries.
///
/// The token is marked sensitive so it never shows up in debug output.
pub fn auth_header_map(token: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))?;
    auth.set_sensitive(true);
    h.insert(AUTHORIZATION, auth);
    Ok(h)
}

/// Build the shared `reqwest` client with auth headers and a request timeout.
pub fn build_http_client(token: &str, timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(auth_header_map(token)?)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_map_sets_bearer_token() {
        let headers = auth_header_map("abc.def").unwrap();

        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc.def");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn test_auth_header_map_trims_token() {
        let headers = auth_header_map("  abc\n").unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
    }

    #[test]
    fn test_auth_header_map_rejects_control_characters() {
        let result = auth_header_map("abc\ndef");
        assert!(result.is_err());
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client("token", Duration::from_secs(5));
        assert!(client.is_ok());
    }
}
