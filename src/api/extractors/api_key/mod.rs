/*!
 * API key extractor
 *
 * Responsibility:
 * - `Authorization: ApiKey <token>` の token を handler に渡す
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - ApiKey
 */

mod core;
mod types;

pub(crate) use self::core::from_headers;
pub use types::ApiKey;
