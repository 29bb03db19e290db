/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (Secret は Arc なので cheap)
 * - 起動後は read-only (lock 不要)
 */
use crate::auth::Secret;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub secret: Secret,
}

impl AppState {
    pub fn new(secret: Secret) -> Self {
        Self { secret }
    }
}
