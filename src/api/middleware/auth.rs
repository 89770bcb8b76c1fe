use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{debug, warn};

use crate::domain::{ApiKey, AuthError};

/// Rejects requests without a well-formed `Authorization: ApiKey <token>` header.
///
/// On success the extracted [`ApiKey`] is stored in the request extensions.
pub async fn api_key_auth(mut request: Request, next: Next) -> Result<Response, AuthError> {
    let api_key = match ApiKey::from_headers(request.headers()) {
        Ok(api_key) => api_key,
        Err(err) => {
            warn!(
                method = %request.method(),
                path = %request.uri().path(),
                code = err.code(),
                "Rejected request: {}",
                err
            );
            return Err(err);
        }
    };

    debug!(key_hint = %api_key.hint(), "API key extracted");
    request.extensions_mut().insert(api_key);

    Ok(next.run(request).await)
}
