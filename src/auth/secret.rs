//! Shared-secret request verification.
//!
//! The secret is compared against the raw first `Authorization` value.
//! No scheme prefix (`Bearer `) is stripped.

use std::fmt;
use std::sync::Arc;

use axum::http::header;
use subtle::ConstantTimeEq;

use crate::headers::HeaderSource;

/// Process-wide shared secret. Empty means authentication is disabled.
#[derive(Clone, Default)]
pub struct Secret(Arc<[u8]>);

impl Secret {
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self(Arc::from(bytes.as_ref()))
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_disabled() {
            f.write_str("Secret(disabled)")
        } else {
            f.write_str("Secret(<redacted>)")
        }
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

/// Returns true when the request carries the configured secret.
///
/// - empty secret: always true, no header is read
/// - no `Authorization` header: false
/// - otherwise: constant-time comparison, lengths must match
pub fn verify<H: HeaderSource + ?Sized>(secret: &Secret, headers: &H) -> bool {
    if secret.is_disabled() {
        return true;
    }

    let Some(provided) = headers.first_value(header::AUTHORIZATION.as_str()) else {
        return false;
    };

    // ct_eq は長さ不一致なら即 0, 内容比較は短絡しない
    secret.as_bytes().ct_eq(provided).into()
}
