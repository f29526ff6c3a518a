//! Default implementation of the user service.

use std::sync::Arc;

use tracing::trace;

use crate::{
    ports::{UserRepository, UserService},
    user::User,
};

/// User service delegating storage to an injected repository.
///
/// The repository is supplied at construction; the service never builds or
/// locates one itself.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use userdi::adapters::InMemoryUserRepository;
/// use userdi::ports::UserService;
/// use userdi::services::UserServiceImpl;
///
/// let service = UserServiceImpl::new(Arc::new(InMemoryUserRepository::new()));
/// service.add("user1@email.com", "user1", "secret");
/// assert_eq!(service.get_all().len(), 1);
/// ```
pub struct UserServiceImpl {
    repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

impl UserService for UserServiceImpl {
    fn add(&self, email: &str, name: &str, password: &str) {
        let user = User::new(email, name, password);
        trace!(id = %user.id(), email, "adding user");
        self.repository.add(user);
    }

    fn get(&self, email: &str) -> Option<User> {
        self.repository.get(email)
    }

    fn get_all(&self) -> Vec<User> {
        self.repository.get_all()
    }
}
