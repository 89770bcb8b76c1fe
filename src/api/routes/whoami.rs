use axum::{Extension, Json};
use serde::Serialize;

use crate::domain::{ApiKey, AUTH_SCHEME};

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub authenticated: bool,
    pub scheme: &'static str,
    pub key_hint: String,
}

/// Echoes back that the request carried a well-formed API key.
///
/// Only the last few characters of the key are returned.
pub async fn whoami(Extension(api_key): Extension<ApiKey>) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        authenticated: true,
        scheme: AUTH_SCHEME,
        key_hint: api_key.hint(),
    })
}
