use axum::extract::{FromRef, FromRequestParts};
use axum::http::{HeaderMap, request::Parts};

use crate::config::AuthConfig;
use crate::error::AppError;
use crate::services::auth::get_api_key;

use super::ApiKey;

/// Parse the key out of `headers`, mapping failures to the HTTP rejection.
///
/// Shared by the extractor and `middleware::auth::api_key`.
pub(crate) fn from_headers(
    headers: &HeaderMap,
    config: &AuthConfig,
) -> Result<ApiKey, AppError> {
    match get_api_key(headers) {
        Ok(token) => {
            tracing::debug!("api key extracted from authorization header");
            Ok(ApiKey(token.to_owned()))
        }
        Err(err) => {
            // header の値そのものは出さない
            tracing::warn!(error = %err, "api key extraction failed");
            Err(AppError::from_auth_header(err, config))
        }
    }
}

/// middleware が ApiKey を extensions に insert 済みならそれを使い、
/// なければ Authorization header をここで読む
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
    AuthConfig: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(key) = parts.extensions.get::<ApiKey>() {
            return Ok(key.clone());
        }

        let config = AuthConfig::from_ref(state);
        from_headers(&parts.headers, &config)
    }
}
