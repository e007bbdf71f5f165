//! Login name utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum login length accepted by the API
pub const LOGIN_MIN_LENGTH: usize = 3;

/// Maximum login length accepted by the API
pub const LOGIN_MAX_LENGTH: usize = 64;

// Login names: letters, digits, dot, underscore, hyphen
static LOGIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{2,63}$").unwrap()
});

/// Normalize a login by trimming surrounding whitespace
pub fn normalize_login(login: &str) -> &str {
    login.trim()
}

/// Check if a login name is valid
pub fn is_valid_login(login: &str) -> bool {
    LOGIN_REGEX.is_match(normalize_login(login))
}
