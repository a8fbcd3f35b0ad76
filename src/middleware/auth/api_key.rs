//! `Authorization: ApiKey <token>` を取り出す → ApiKey を extensions に入れる
//!
//! - 形式チェックのみ。key が有効かどうかは後段 (handler 側) で判断する。
//! - header なし → 401 + `WWW-Authenticate`、形式不正 → 400。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::api_key::from_headers;
use crate::config::AuthConfig;
use crate::error::AppError;

/// Require an `ApiKey` authorization header on every route of `router`.
///
/// ```ignore
/// let protected = Router::new().route("/reports", get(reports));
/// let protected = middleware::auth::api_key::apply(protected, config.clone());
/// app = app.nest("/api", protected);
/// ```
pub fn apply<S>(router: Router<S>, config: AuthConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(config, api_key_middleware))
}

async fn api_key_middleware(
    State(config): State<AuthConfig>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let key = from_headers(req.headers(), &config)?;

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(key);

    Ok(next.run(req).await)
}
