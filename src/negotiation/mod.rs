/*!
 * Media type negotiation
 *
 * Responsibility:
 * - 受信 body の Content-Type 検証 (JSON / plain text のみ)
 * - Accept header から応答の ContentType を決める
 *
 * Public API:
 * - ContentType
 * - is_acceptable_content_type
 * - accepts_json / negotiate_content_type
 */

mod accept;
mod content_type;
mod types;

pub use accept::{accepts_json, negotiate_content_type};
pub use content_type::is_acceptable_content_type;
pub use types::ContentType;
