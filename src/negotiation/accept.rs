//! `Accept` header negotiation between JSON and plain text.
//!
//! Entries are evaluated strictly in header order and the first entry that
//! matches wins. Quality values (`q=`) are stripped along with every other
//! parameter and carry no weight.

use axum::http::header;

use crate::headers::HeaderSource;

use super::ContentType;

const JSON_RANGES: [&str; 3] = ["*/*", "application/*", "application/json"];
const PLAIN_TEXT: &str = "text/plain";

/// Splits an `Accept` value into bare media-range tokens.
///
/// `"text/plain;q=0.5, */*"` yields `"text/plain"`, `"*/*"`. An empty value
/// yields a single empty token.
pub fn media_ranges(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(|entry| {
        let entry = entry.trim();
        // split は最低 1 要素を返す
        entry.split(';').next().unwrap_or(entry).trim()
    })
}

fn matches_json(range: &str) -> bool {
    JSON_RANGES.contains(&range)
}

fn classify(range: &str) -> Option<ContentType> {
    if matches_json(range) {
        Some(ContentType::Json)
    } else if range == PLAIN_TEXT {
        Some(ContentType::PlainText)
    } else {
        None
    }
}

/// True when the client accepts a JSON response.
///
/// An absent `Accept` header accepts JSON.
pub fn accepts_json<H: HeaderSource + ?Sized>(headers: &H) -> bool {
    match headers.first_str(header::ACCEPT.as_str()) {
        None => true,
        Some(None) => false,
        Some(Some(value)) => media_ranges(value).any(matches_json),
    }
}

/// Picks the response type from the `Accept` header.
///
/// - no header: `Some(Json)`
/// - first entry matching `*/*`, `application/*` or `application/json`: `Some(Json)`
/// - first entry matching `text/plain`: `Some(PlainText)`
/// - nothing matches: `None` (406 Not Acceptable, not "use JSON")
pub fn negotiate_content_type<H: HeaderSource + ?Sized>(headers: &H) -> Option<ContentType> {
    match headers.first_str(header::ACCEPT.as_str()) {
        None => Some(ContentType::Json),
        Some(None) => None,
        Some(Some(value)) => media_ranges(value).find_map(classify),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue};

    use super::*;

    fn accept(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn media_ranges_strip_parameters_and_whitespace() {
        let value = " text/plain ; q=0.5 ,application/json;charset=utf-8, ;q=1";
        let ranges: Vec<_> = media_ranges(value).collect();
        assert_eq!(ranges, vec!["text/plain", "application/json", ""]);
    }

    #[test]
    fn media_ranges_of_empty_value_is_one_empty_token() {
        let ranges: Vec<_> = media_ranges("").collect();
        assert_eq!(ranges, vec![""]);
    }

    #[test]
    fn accepts_json_cases() {
        assert!(accepts_json(&HeaderMap::new()));
        assert!(accepts_json(&accept("*/*")));
        assert!(accepts_json(&accept("application/*")));
        assert!(accepts_json(&accept("application/json")));
        assert!(accepts_json(&accept("text/plain, application/json")));
        assert!(accepts_json(&accept("text/html;q=0.9, application/json;q=0.1")));

        assert!(!accepts_json(&accept("text/plain")));
        assert!(!accepts_json(&accept("text/html")));
        assert!(!accepts_json(&accept("")));
        assert!(!accepts_json(&accept("Application/JSON")));
    }

    #[test]
    fn negotiate_without_header_defaults_to_json() {
        assert_eq!(negotiate_content_type(&HeaderMap::new()), Some(ContentType::Json));
    }

    #[test]
    fn negotiate_single_entries() {
        assert_eq!(negotiate_content_type(&accept("application/json")), Some(ContentType::Json));
        assert_eq!(negotiate_content_type(&accept("*/*")), Some(ContentType::Json));
        assert_eq!(negotiate_content_type(&accept("application/*")), Some(ContentType::Json));
        assert_eq!(negotiate_content_type(&accept("text/plain")), Some(ContentType::PlainText));
        assert_eq!(
            negotiate_content_type(&accept("text/plain; charset=utf-8")),
            Some(ContentType::PlainText)
        );
    }

    #[test]
    fn negotiate_first_matching_entry_wins() {
        assert_eq!(
            negotiate_content_type(&accept("text/plain, application/json")),
            Some(ContentType::PlainText)
        );
        assert_eq!(
            negotiate_content_type(&accept("application/json, text/plain")),
            Some(ContentType::Json)
        );
        // q-values do not reorder entries
        assert_eq!(
            negotiate_content_type(&accept("text/plain;q=0.1, application/json;q=1.0")),
            Some(ContentType::PlainText)
        );
        assert_eq!(
            negotiate_content_type(&accept("text/html, image/png, text/plain, */*")),
            Some(ContentType::PlainText)
        );
    }

    #[test]
    fn negotiate_fails_when_nothing_matches() {
        assert_eq!(negotiate_content_type(&accept("text/html")), None);
        assert_eq!(negotiate_content_type(&accept("")), None);
        assert_eq!(negotiate_content_type(&accept(";q=0.5, ,")), None);
        assert_eq!(negotiate_content_type(&accept("text/*")), None);
    }

    #[test]
    fn non_utf8_accept_is_present_but_unmatched() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_bytes(&[0xff]).unwrap());

        assert!(!accepts_json(&headers));
        assert_eq!(negotiate_content_type(&headers), None);
    }

    #[test]
    fn negotiated_type_is_accepted_when_redeclared() {
        for value in ["application/json", "*/*", "application/*"] {
            let ct = negotiate_content_type(&accept(value)).unwrap();
            assert!(accepts_json(&accept(ct.media_type())));
        }

        let ct = negotiate_content_type(&accept("text/plain")).unwrap();
        assert_eq!(negotiate_content_type(&accept(ct.media_type())), Some(ct));
    }
}
