//! Environment variable helpers.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_blank_and_trims() {
        temp_env::with_vars(
            [
                ("KEYSHEET_TEST_BLANK", Some("   ")),
                ("KEYSHEET_TEST_PADDED", Some("  /tmp/a.json ")),
                ("KEYSHEET_TEST_PLAIN", Some("/tmp/b.json")),
            ],
            || {
                assert_eq!(env_var_or_none("KEYSHEET_TEST_BLANK"), None);
                assert_eq!(
                    env_var_or_none("KEYSHEET_TEST_PADDED").as_deref(),
                    Some("/tmp/a.json")
                );
                assert_eq!(
                    env_var_or_none("KEYSHEET_TEST_PLAIN").as_deref(),
                    Some("/tmp/b.json")
                );
                assert_eq!(env_var_or_none("KEYSHEET_TEST_UNSET_VARIABLE"), None);
            },
        );
    }
}
