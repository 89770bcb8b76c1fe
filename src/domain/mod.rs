pub mod credentials;
pub mod errors;

pub use credentials::{extract_api_key, ApiKey, AUTH_SCHEME};
pub use errors::{AuthError, Result};
