/*
 * Responsibility
 * - `Authorization: ApiKey <token>` から token を取り出す
 * - 形式チェックのみ (key が正しいかどうかは呼び出し側の責務)
 * - HTTP status への変換は error.rs 側で行う
 */
use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Scheme word expected in front of the key.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthHeaderError {
    /// Header is absent or its value is empty.
    #[error("no authorization header included")]
    NoAuthHeader,
    /// Header is present but is not `ApiKey <token>`.
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extract the API key from `Authorization: ApiKey <token>`.
///
/// The token is everything after the first run of spaces/tabs, returned as-is.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, AuthHeaderError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(AuthHeaderError::NoAuthHeader),
    };

    // obs-text などで str にできない値は「あるが読めない」扱い
    let value = value
        .to_str()
        .map_err(|_| AuthHeaderError::MalformedHeader)?;

    let (scheme, rest) = value
        .split_once(is_ows)
        .ok_or(AuthHeaderError::MalformedHeader)?;

    if scheme != API_KEY_SCHEME {
        return Err(AuthHeaderError::MalformedHeader);
    }

    let token = rest.trim_start_matches(is_ows);
    if token.is_empty() {
        return Err(AuthHeaderError::MalformedHeader);
    }

    Ok(token)
}

// RFC 9110 OWS
fn is_ows(c: char) -> bool {
    c == ' ' || c == '\t'
}
