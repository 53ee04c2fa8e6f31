//! `document.cookie` string helpers.
//!
//! Values are passed through untouched; encoding is the caller's concern.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Find the value stored under `key` in a `name=value; name=value` string.
///
/// The first pair with a matching name wins. Pairs without `=` are skipped.
pub fn lookup<'a>(cookies: &'a str, key: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| name.trim() == key)
        .map(|(_, value)| value.trim())
}

/// Build a root-path session cookie assignment for `key`.
pub fn assignment(key: &str, value: &str) -> String {
    format!("{key}={value}; path=/")
}
