//! Username validation
//!
//! Rejects empty or malformed usernames before any network request is made.

use thiserror::Error;

/// Maximum username length accepted by the upstream platform
pub const MAX_USERNAME_LEN: usize = 15;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Invalid username format")]
    InvalidFormat,
}

/// Validate a raw username.
///
/// Accepts 1 to 15 ASCII letters, digits, hyphens, or underscores.
pub fn validate(raw: &str) -> Result<&str, UsernameError> {
    if raw.trim().is_empty() {
        return Err(UsernameError::Empty);
    }

    if raw.len() > MAX_USERNAME_LEN || !raw.chars().all(is_allowed_char) {
        return Err(UsernameError::InvalidFormat);
    }

    Ok(raw)
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_rejected() {
        assert_eq!(validate(""), Err(UsernameError::Empty));
    }

    #[test]
    fn test_whitespace_only_rejected() {
        assert_eq!(validate("   "), Err(UsernameError::Empty));
        assert_eq!(validate("\t\n"), Err(UsernameError::Empty));
    }

    #[test]
    fn test_valid_usernames_accepted() {
        assert_eq!(validate("a"), Ok("a"));
        assert_eq!(validate("alice"), Ok("alice"));
        assert_eq!(validate("user_name-42"), Ok("user_name-42"));
        assert_eq!(validate("ABCDEFGHIJKLMNO"), Ok("ABCDEFGHIJKLMNO")); // 15 chars
    }

    #[test]
    fn test_too_long_rejected() {
        // 16 chars, one over the limit
        assert_eq!(
            validate("abcdefghijklmnop"),
            Err(UsernameError::InvalidFormat)
        );
    }

    #[test]
    fn test_illegal_characters_rejected() {
        assert_eq!(validate("user name"), Err(UsernameError::InvalidFormat));
        assert_eq!(validate(" alice"), Err(UsernameError::InvalidFormat));
        assert_eq!(validate("alice!"), Err(UsernameError::InvalidFormat));
        assert_eq!(validate("ali.ce"), Err(UsernameError::InvalidFormat));
        assert_eq!(validate("日本語"), Err(UsernameError::InvalidFormat));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UsernameError::Empty.to_string(),
            "Username cannot be empty"
        );
        assert_eq!(
            UsernameError::InvalidFormat.to_string(),
            "Invalid username format"
        );
    }

    // =========================================================================
    // Property-Based Tests
    // =========================================================================

    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// For any string of 1-15 characters over the allowed alphabet,
        /// validation passes and returns the input unchanged.
        #[test]
        fn prop_allowed_alphabet_accepted(name in "[A-Za-z0-9_-]{1,15}") {
            prop_assert_eq!(validate(&name), Ok(name.as_str()));
        }

        /// For any string longer than 15 characters, validation fails
        /// before any network activity could happen.
        #[test]
        fn prop_overlong_rejected(name in "[A-Za-z0-9_-]{16,40}") {
            prop_assert_eq!(validate(&name), Err(UsernameError::InvalidFormat));
        }

        /// For any input containing a character outside the allowed alphabet,
        /// validation fails.
        #[test]
        fn prop_illegal_char_rejected(
            prefix in "[A-Za-z0-9_-]{0,6}",
            bad in "[ !@#$%^&*().+=/\\\\]",
            suffix in "[A-Za-z0-9_-]{0,6}",
        ) {
            let name = format!("{prefix}{bad}{suffix}");
            prop_assert!(validate(&name).is_err());
        }
    }
}
