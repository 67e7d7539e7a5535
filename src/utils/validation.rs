//! Format checks for target URLs and short codes.
//!
//! Both functions are pure and never touch the store.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Compiled regex for short code validation.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("code regex is valid"));

/// Returns true if `input` parses as an absolute URL whose scheme is `http`
/// or `https`.
///
/// Scheme-less input (`example.com`), other schemes (`ftp:`, `file:`,
/// `javascript:`) and unparsable strings are rejected.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com/path"));
/// assert!(!is_valid_url("ftp://example.com"));
/// assert!(!is_valid_url("www.example.com"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Returns true if `code` is 6 to 8 ASCII letters or digits.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}
