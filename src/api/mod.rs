/*
 * Responsibility
 * - handler 側に公開する axum 向けの型 (extractor)
 */
pub mod extractors;
