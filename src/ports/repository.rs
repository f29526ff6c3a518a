//! Repository port for user storage.
//!
//! This module defines the trait boundary between the domain and the storage
//! backends holding users.

use crate::user::User;

/// Port for storing and looking up users.
///
/// This trait abstracts the storage mechanism so services never depend on a
/// concrete backend. Implementations keep users in insertion order and do not
/// enforce email uniqueness.
///
/// # Examples
///
/// ```
/// use userdi::User;
/// use userdi::adapters::InMemoryUserRepository;
/// use userdi::ports::UserRepository;
///
/// fn count_users<R: UserRepository + ?Sized>(repo: &R) -> usize {
///     repo.get_all().len()
/// }
///
/// let repo = InMemoryUserRepository::new();
/// repo.add(User::new("user1@email.com", "user1", "secret"));
/// assert_eq!(count_users(&repo), 1);
/// ```
pub trait UserRepository: Send + Sync {
    /// Append a user to the collection.
    fn add(&self, user: User);

    /// Find the first user whose email equals `email`.
    ///
    /// Returns `None` when no user matches; absence is an expected outcome,
    /// not an error.
    fn get(&self, email: &str) -> Option<User>;

    /// Snapshot of all users in insertion order.
    ///
    /// The returned vector is a copy: later additions to the repository do not
    /// show up in it.
    fn get_all(&self) -> Vec<User>;
}
