//! Identifier validator
//!
//! Validates the user identifier presented at session bind time. The
//! identifier names a directory under the data root, so shape checks here
//! double as path-safety checks.

use crate::config::ServerConfig;
use crate::error::AuthError;
use crate::storage::validation::is_safe_user_id;

/// Performs basic input sanitation to check for malicious or malformed identifiers.
fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty() && input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}

/// Validates that the given identifier is acceptable as a profile key.
pub fn validate_user_id(user_id: &str, config: &ServerConfig) -> Result<(), AuthError> {
    if !is_valid_input(user_id, config.max_user_id_length) {
        return Err(AuthError::MalformedInput("Invalid identifier format".into()));
    }

    if !is_safe_user_id(user_id) {
        return Err(AuthError::InvalidUserId(user_id.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_identifiers_pass() {
        let config = ServerConfig::default();
        assert!(validate_user_id("550e8400-e29b-41d4-a716-446655440000", &config).is_ok());
        assert!(validate_user_id("alice", &config).is_ok());
    }

    #[test]
    fn oversized_identifier_rejected() {
        let config = ServerConfig::default();
        let long_id = "a".repeat(config.max_user_id_length + 1);
        assert!(matches!(
            validate_user_id(&long_id, &config),
            Err(AuthError::MalformedInput(_))
        ));
    }

    #[test]
    fn traversal_shaped_identifier_rejected() {
        let config = ServerConfig::default();
        for bad in ["../escape", "a/b", "..", ".hidden"] {
            assert!(
                matches!(
                    validate_user_id(bad, &config),
                    Err(AuthError::InvalidUserId(_))
                ),
                "{bad} should be rejected"
            );
        }
    }
}
