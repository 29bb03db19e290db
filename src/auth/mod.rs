/*
 * Responsibility
 * - shared secret による request 認証 (Authorization header)
 */
mod secret;

pub use secret::{Secret, verify};
