//! Extraction of `Authorization: ApiKey <token>` credentials from HTTP
//! request headers, plus a small axum surface that hosts it.
//!
//! ```rust
//! use apikey_auth::domain::{extract_api_key, AuthError};
//! use axum::http::{header, HeaderMap, HeaderValue};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(header::AUTHORIZATION, HeaderValue::from_static("ApiKey abc123"));
//! assert_eq!(extract_api_key(&headers).unwrap(), "abc123");
//!
//! assert_eq!(
//!     extract_api_key(&HeaderMap::new()),
//!     Err(AuthError::NoAuthHeaderIncluded)
//! );
//! ```

pub mod api;
pub mod domain;
pub mod infrastructure;

pub use domain::{extract_api_key, ApiKey, AuthError, AUTH_SCHEME};
