//! Environment configuration resolution for Banter.
//!
//! All configuration comes from process environment variables, each with
//! accepted aliases checked in priority order. Absence of any value is
//! non-fatal: the corresponding feature degrades (no persistence, or
//! not-configured replies) instead of failing startup.

use secrecy::SecretString;

/// Accepted aliases for the datastore URL, in priority order.
const DATABASE_URL_VARS: &[&str] = &["BANTER_DATABASE_URL", "DATABASE_URL"];

/// Accepted aliases for the Gemini API key, in priority order.
const GEMINI_KEY_VARS: &[&str] = &["GEMINI_API_KEY_TEXT", "GEMINI_API_KEY_IMAGE"];

fn first_non_empty(vars: &[&str]) -> Option<String> {
    vars.iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

/// Resolve the datastore URL, if configured.
pub fn database_url() -> Option<String> {
    first_non_empty(DATABASE_URL_VARS)
}

/// Resolve the Gemini API key, if configured.
///
/// The key is wrapped in [`SecretString`] immediately so it never transits
/// plain `String` values outside this function.
pub fn gemini_api_key() -> Option<SecretString> {
    first_non_empty(GEMINI_KEY_VARS).map(SecretString::from)
}
