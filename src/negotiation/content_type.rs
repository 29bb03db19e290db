//! Validation of the declared request body type (`Content-Type`).

use std::collections::HashSet;

use axum::http::header;
use mime::Mime;

use crate::headers::HeaderSource;

use super::ContentType;

/// Parses a `Content-Type` value, dropping its parameters.
///
/// Whitespace before the first `;` is allowed (`application/json ; charset=utf-8`).
/// A parameter name repeated (case-insensitively) makes the value malformed.
fn parse_media_type(value: &str) -> Option<Mime> {
    let value = value.trim();
    let media_type = match value.split_once(';') {
        // Mime は type/subtype 直後の空白を受け付けない
        Some((base, params)) => format!("{};{}", base.trim_end(), params).parse::<Mime>(),
        None => value.parse::<Mime>(),
    }
    .ok()?;

    let mut seen = HashSet::new();
    let unique = media_type
        .params()
        .all(|(name, _)| seen.insert(name.as_str().to_ascii_lowercase()));

    unique.then_some(media_type)
}

/// True when the request body is declared as JSON or plain text.
///
/// An absent header passes. A malformed value fails. Wildcards fail, since
/// this is the type the client *sent*, not a range it would accept.
pub fn is_acceptable_content_type<H: HeaderSource + ?Sized>(headers: &H) -> bool {
    let Some(value) = headers.first_str(header::CONTENT_TYPE.as_str()) else {
        return true;
    };

    let Some(media_type) = value.and_then(parse_media_type) else {
        return false;
    };

    let essence = media_type.essence_str();
    [ContentType::Json, ContentType::PlainText]
        .iter()
        .any(|ct| essence.eq_ignore_ascii_case(ct.media_type()))
}
