//! Service port - domain operations on users.

use crate::{Result, error::Error, user::User};

/// User service trait - the API consumed by drivers.
///
/// Implementations layer domain operations over a [`UserRepository`] supplied
/// at construction.
///
/// [`UserRepository`]: crate::ports::UserRepository
pub trait UserService: Send + Sync {
    /// Create a user from the given fields and store it.
    ///
    /// No validation is performed on any of the inputs.
    fn add(&self, email: &str, name: &str, password: &str);

    /// Look up the first user registered with `email`.
    fn get(&self, email: &str) -> Option<User>;

    /// All users in insertion order.
    fn get_all(&self) -> Vec<User>;

    /// Look up a user, treating absence as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserNotFound`] if no user has the given email.
    fn require(&self, email: &str) -> Result<User> {
        self.get(email).ok_or_else(|| Error::UserNotFound {
            email: email.to_string(),
        })
    }
}
