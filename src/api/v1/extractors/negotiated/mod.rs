/*!
 * Negotiated content type extractor
 *
 * Responsibility:
 * - guard middleware が決めた ContentType を handler に渡す
 * - HTTP / axum 依存は core に閉じ込める
 *
 * Public API:
 * - Negotiated
 */

mod core;

pub use self::core::Negotiated;
