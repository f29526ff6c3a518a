//! The user entity.

use std::fmt;

use serde::Serialize;

use crate::identifiers::UserId;

/// A registered user.
///
/// Users are immutable once constructed. The password is kept in plaintext;
/// this mirrors a toy domain and must not be carried into a real identity
/// system.
///
/// # Examples
///
/// ```
/// use userdi::User;
///
/// let user = User::new("user1@email.com", "user1", "secret");
/// assert_eq!(user.email(), "user1@email.com");
/// assert_eq!(user.name(), "user1");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    email: String,
    name: String,
    password: String,
}

impl User {
    /// Create a user with a freshly generated identifier.
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::generate(),
            email: email.into(),
            name: name.into(),
            password: password.into(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keeps passwords out of log output.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_fields() {
        let user = User::new("a@b.c", "alice", "hunter2");
        assert_eq!(user.email(), "a@b.c");
        assert_eq!(user.name(), "alice");
        assert_eq!(user.password(), "hunter2");
    }

    #[test]
    fn test_each_user_gets_fresh_id() {
        let a = User::new("same@email.com", "same", "secret");
        let b = User::new("same@email.com", "same", "secret");
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_redacts_password() {
        let user = User::new("a@b.c", "alice", "hunter2");
        let rendered = format!("{user:?}");
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }
}
