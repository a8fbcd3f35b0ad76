/*
 * Responsibility
 * - ApiKey 抽出失敗を HTTP レスポンスに変換する AppError
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - NoAuthHeader → 401 (WWW-Authenticate 付き), MalformedHeader → 400
 */
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::config::AuthConfig;
use crate::services::auth::AuthHeaderError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    BadRequest { code: &'static str, message: String },
    #[error("unauthorized")]
    Unauthorized { challenge: String },
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn unauthorized(config: &AuthConfig) -> Self {
        Self::Unauthorized {
            challenge: config.challenge(),
        }
    }

    pub fn from_auth_header(err: AuthHeaderError, config: &AuthConfig) -> Self {
        match err {
            AuthHeaderError::NoAuthHeader => Self::unauthorized(config),
            AuthHeaderError::MalformedHeader => {
                Self::bad_request("MALFORMED_AUTHORIZATION_HEADER", err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, challenge) = match self {
            AppError::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, code, message, None)
            }
            AppError::Unauthorized { challenge } => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "unauthorized".into(),
                Some(challenge),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        match challenge {
            Some(challenge) => {
                // header にできない challenge で 500 にしない
                let challenge = HeaderValue::try_from(challenge).unwrap_or_else(|_| {
                    tracing::warn!("invalid WWW-Authenticate challenge, using default realm");
                    HeaderValue::try_from(AuthConfig::default().challenge())
                        .unwrap_or_else(|_| HeaderValue::from_static("ApiKey"))
                });
                (status, [(header::WWW_AUTHENTICATE, challenge)], Json(body)).into_response()
            }
            None => (status, Json(body)).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_auth_header_maps_to_unauthorized_with_challenge() {
        let config = AuthConfig::new("billing").unwrap();
        let err = AppError::from_auth_header(AuthHeaderError::NoAuthHeader, &config);
        match err {
            AppError::Unauthorized { challenge } => {
                assert_eq!(challenge, "ApiKey realm=\"billing\"")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn malformed_maps_to_bad_request() {
        let err =
            AppError::from_auth_header(AuthHeaderError::MalformedHeader, &AuthConfig::default());
        match err {
            AppError::BadRequest { code, message } => {
                assert_eq!(code, "MALFORMED_AUTHORIZATION_HEADER");
                assert_eq!(message, "malformed authorization header");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn response_status_and_header() {
        let config = AuthConfig::new("billing").unwrap();
        let res =
            AppError::from_auth_header(AuthHeaderError::NoAuthHeader, &config).into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            res.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "ApiKey realm=\"billing\""
        );

        let res = AppError::from_auth_header(AuthHeaderError::MalformedHeader, &config)
            .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(res.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn unusable_challenge_still_gives_401() {
        let err = AppError::Unauthorized {
            challenge: "bad\"\u{7f}".into(),
        };
        let res = err.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            res.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "ApiKey realm=\"api\""
        );
    }
}
