//! Surface-syntax format predicates
//!
//! Boolean predicates over strings for URL and email validation. These
//! check shape only; nothing is resolved or fetched.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    // scheme, authority, then any run of non-whitespace
    Regex::new(r"(?i)^(?:https?|ftps?)://[^\s/?#]+[^\s]*$").expect("url pattern is valid")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // local@domain with a dotted domain part
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Check whether `value` looks like a URL
///
/// Accepts `http`, `https`, `ftp` and `ftps` schemes. Whitespace anywhere
/// in the value fails the check.
#[must_use]
pub fn is_url(value: &str) -> bool {
    URL_RE.is_match(value)
}

/// Check whether `value` looks like an email address
///
/// Requires exactly one `@` separating a non-empty local part from a
/// dotted domain.
#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
