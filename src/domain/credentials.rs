use std::fmt;

use axum::http::{header, HeaderMap};

use crate::domain::errors::{AuthError, Result};

/// Scheme prefix accepted in the `Authorization` header.
pub const AUTH_SCHEME: &str = "ApiKey";

/// Extracts the API key from an `Authorization: ApiKey <token>` header.
///
/// Only the first whitespace-delimited field after the scheme is returned;
/// anything following it is ignored. The key is not checked against any store.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::NoAuthHeaderIncluded),
    };

    let value =
        std::str::from_utf8(value.as_bytes()).map_err(|_| AuthError::MalformedAuthHeader)?;

    let mut fields = value.split_whitespace();
    if fields.next() != Some(AUTH_SCHEME) {
        return Err(AuthError::MalformedAuthHeader);
    }

    fields
        .next()
        .map(str::to_owned)
        .ok_or(AuthError::MalformedAuthHeader)
}

/// An API key taken from a request, carried through request extensions.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        extract_api_key(headers).map(Self)
    }

    /// Last four characters of the key, for display without exposing it.
    pub fn hint(&self) -> String {
        let count = self.0.chars().count();
        self.0.chars().skip(count.saturating_sub(4)).collect()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}
