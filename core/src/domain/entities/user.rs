//! User entity representing a registered account in the Streetcode system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A regular authenticated user
    User,
    /// An administrator with full content access
    Admin,
}

impl Role {
    /// Returns the canonical role name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Role names embedded as claims in an access token
    ///
    /// Administrators also carry the plain user role so endpoints guarded
    /// for regular users accept admin tokens without a separate check.
    pub fn claim_roles(&self) -> Vec<String> {
        match self {
            Role::User => vec!["user".to_string()],
            Role::Admin => vec!["admin".to_string(), "user".to_string()],
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique login name
    pub login: String,

    /// Bcrypt hash of the user's password
    pub password_hash: String,

    /// Role assigned to this account
    pub role: Role,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(login: String, password_hash: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            login,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the user is an administrator
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    /// Role names to embed in this user's access tokens
    pub fn role_claims(&self) -> Vec<String> {
        self.role.claim_roles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new("editor".to_string(), "bcrypt_hash".to_string(), Role::User);

        assert_eq!(user.login, "editor");
        assert_eq!(user.password_hash, "bcrypt_hash");
        assert_eq!(user.role, Role::User);
        assert!(!user.is_admin());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_admin_role_claims() {
        let admin = User::new("admin".to_string(), "hash".to_string(), Role::Admin);

        assert!(admin.is_admin());
        assert_eq!(admin.role_claims(), vec!["admin", "user"]);
    }

    #[test]
    fn test_user_role_claims() {
        let user = User::new("reader".to_string(), "hash".to_string(), Role::User);
        assert_eq!(user.role_claims(), vec!["user"]);
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("User".parse::<Role>(), Ok(Role::User));
        assert!("moderator".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");

        let json = serde_json::to_string(&Role::User).unwrap();
        assert_eq!(json, "\"user\"");
    }
}
