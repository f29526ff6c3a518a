//! In-memory user repository.
//!
//! This adapter keeps users in a vector owned by the repository instance.
//! Nothing outlives the process.

use std::sync::{PoisonError, RwLock};

use crate::{ports::UserRepository, user::User};

/// In-memory repository backed by an ordered `Vec<User>`.
///
/// # Examples
///
/// ```
/// use userdi::User;
/// use userdi::adapters::InMemoryUserRepository;
/// use userdi::ports::UserRepository;
///
/// let repo = InMemoryUserRepository::new();
/// repo.add(User::new("user1@email.com", "user1", "secret"));
///
/// let found = repo.get("user1@email.com").unwrap();
/// assert_eq!(found.name(), "user1");
/// assert!(repo.get("missing@email.com").is_none());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `users`, in the given order.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().collect()),
        }
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserRepository for InMemoryUserRepository {
    fn add(&self, user: User) {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(user);
    }

    fn get(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|user| user.email() == email)
            .cloned()
    }

    fn get_all(&self) -> Vec<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
