//! Throttle credential extraction from HTTP request headers.

use axum::http::{HeaderMap, header};

const BEARER_PREFIX: &[u8] = b"bearer ";

/// Extracts the bearer credential used as the throttle key.
///
/// Reads the `Authorization` header and strips a leading `Bearer ` prefix
/// (matched case-insensitively). A value without the prefix, including a bare
/// `Bearer`, is used as-is. The token itself is returned unchanged; it is
/// never validated here.
///
/// The header is handled as raw bytes. Non-ASCII tokens are kept, and bytes
/// that are not valid UTF-8 are replaced with `U+FFFD`, so any present
/// credential yields a key.
///
/// Returns `None` when:
/// - the `Authorization` header is missing
/// - nothing remains after the prefix
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::AUTHORIZATION, "Bearer abc.def".parse().unwrap());
///
/// assert_eq!(extract_credential(&headers).as_deref(), Some("abc.def"));
/// ```
pub fn extract_credential(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.as_bytes().trim_ascii_start();

    let token = match value.get(..BEARER_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => &value[BEARER_PREFIX.len()..],
        _ => value,
    }
    .trim_ascii();

    if token.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(token).into_owned())
    }
}
