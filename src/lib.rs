/*
 * Responsibility
 * - `Authorization: ApiKey <token>` の取り出しと、その axum 向けアダプタ
 * - key の検証・保管はしない (呼び出し側の責務)
 */
pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;

pub use api::extractors::ApiKey;
pub use config::AuthConfig;
pub use error::AppError;
pub use services::auth::{AuthHeaderError, get_api_key};
