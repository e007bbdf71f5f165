//! Password hashing helpers built on bcrypt.

use crate::errors::{DomainError, DomainResult};

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hashes a plain-text password with bcrypt
///
/// # Returns
///
/// * `Ok(String)` - The bcrypt hash to persist
/// * `Err(DomainError::Validation)` - The password is shorter than
///   [`MIN_PASSWORD_LENGTH`]
pub fn hash_password(password: &str) -> DomainResult<String> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::Validation {
            message: format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ),
        });
    }

    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {}", e),
    })
}

/// Verifies a plain-text password against a stored bcrypt hash
pub fn verify_password(password: &str, password_hash: &str) -> DomainResult<bool> {
    bcrypt::verify(password, password_hash).map_err(|e| DomainError::Internal {
        message: format!("Password verification failed: {}", e),
    })
}
