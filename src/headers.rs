/*
 * Responsibility
 * - 受信ヘッダへの読み取り専用アクセス (first value only)
 * - guard のロジックを axum / http の Request 型から切り離す
 */
use axum::http::{HeaderMap, request::Parts};

/// Read-only view over an inbound header collection.
///
/// Only the first value of a header is ever consulted; repeated headers
/// beyond the first are ignored.
pub trait HeaderSource {
    /// Raw bytes of the first value for `name` (case-insensitive), or `None` when absent.
    fn first_value(&self, name: &str) -> Option<&[u8]>;

    /// Outer `None`: header absent. Inner `None`: present but not UTF-8.
    fn first_str(&self, name: &str) -> Option<Option<&str>> {
        self.first_value(name)
            .map(|raw| std::str::from_utf8(raw).ok())
    }
}

impl HeaderSource for HeaderMap {
    fn first_value(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(|v| v.as_bytes())
    }
}

impl HeaderSource for Parts {
    fn first_value(&self, name: &str) -> Option<&[u8]> {
        self.headers.first_value(name)
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for &T {
    fn first_value(&self, name: &str) -> Option<&[u8]> {
        (**self).first_value(name)
    }
}
