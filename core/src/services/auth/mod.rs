//! Authentication service: credential verification and session lifecycle.

pub mod password;
pub mod service;

pub use password::{hash_password, verify_password, MIN_PASSWORD_LENGTH};
pub use service::AuthService;

#[cfg(test)]
mod tests;
