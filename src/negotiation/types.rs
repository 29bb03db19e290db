/*
 * Responsibility
 * - negotiation 結果として handler に渡す ContentType の型 (契約)
 */

/// Response representation chosen for a request.
///
/// `Json` is the zero value and the default when the client states no preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContentType {
    #[default]
    Json,
    PlainText,
}

impl ContentType {
    /// Bare `type/subtype`, as matched against request headers.
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::PlainText => "text/plain",
        }
    }

    /// Value for the response `Content-Type` header.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::PlainText => "text/plain; charset=utf-8",
        }
    }
}
