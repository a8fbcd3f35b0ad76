/*
 * Responsibility
 * - HTTP / axum の配線から切り離したロジック
 */
pub mod auth;
