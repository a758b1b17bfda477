//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

/// Validate a (normalized) username.
///
/// Intake clients send arbitrary display data elsewhere; the username is the
/// one field with a shape requirement since it doubles as the login key.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("username and password required".to_string());
    }

    if username.len() < 3 {
        return Err("username must be at least 3 characters long".to_string());
    }

    if username.len() > 32 {
        return Err("username must be at most 32 characters long".to_string());
    }

    static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = USERNAME_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("Failed to compile username regex"));

    if !regex.is_match(username) {
        return Err("username can only contain letters, numbers, and underscores".to_string());
    }

    Ok(())
}

/// Validate a password. Presence only; no complexity policy is enforced.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("username and password required".to_string());
    }

    if password.len() > 128 {
        return Err("password must be at most 128 characters long".to_string());
    }

    Ok(())
}
