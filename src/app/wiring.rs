//! Composition root for the user domain.
//!
//! Registers the production object graph with a [`Container`] and exposes the
//! assembled services through [`App`].

use std::sync::Arc;

use super::{
    config::{AppConfig, SeedUser},
    container::Container,
};
use crate::{
    Result,
    adapters::InMemoryUserRepository,
    ports::{UserRepository, UserService},
    services::UserServiceImpl,
};

/// Build a container wired with the production graph.
///
/// - `dyn UserRepository` resolves to an [`InMemoryUserRepository`] seeded with
///   the configured users, under the configured lifetime
/// - `dyn UserService` resolves to a transient [`UserServiceImpl`] receiving
///   the repository through its constructor
pub fn build_container(config: &AppConfig) -> Container {
    let seed = config.users.clone();

    Container::builder()
        .register_with_lifetime::<dyn UserRepository, _>(config.lifetime, move |_| {
            let users = seed.iter().map(SeedUser::to_user);
            let repository: Arc<dyn UserRepository> =
                Arc::new(InMemoryUserRepository::with_users(users));
            Ok(repository)
        })
        .register::<dyn UserService, _>(|container| {
            let repository = container.resolve::<dyn UserRepository>()?;
            let service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(repository));
            Ok(service)
        })
        .build()
}

/// Application with dependency injection.
///
/// Owns the container and hands out fully wired services.
///
/// # Examples
///
/// ```
/// use userdi::app::App;
///
/// let app = App::new();
/// let service = app.user_service()?;
/// service.add("user1@email.com", "user1", "secret");
/// assert_eq!(service.get("user1@email.com").unwrap().name(), "user1");
/// # Ok::<(), userdi::Error>(())
/// ```
#[derive(Debug)]
pub struct App {
    container: Container,
}

impl App {
    /// Create an app with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            container: build_container(config),
        }
    }

    /// Wrap a container configured elsewhere, e.g. with test doubles.
    pub fn from_container(container: Container) -> Self {
        Self { container }
    }

    /// Resolve the user service.
    pub fn user_service(&self) -> Result<Arc<dyn UserService>> {
        self.container.resolve::<dyn UserService>()
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Lifetime;

    #[test]
    fn test_default_graph_registers_both_capabilities() {
        let container = build_container(&AppConfig::default());
        assert!(container.is_registered::<dyn UserRepository>());
        assert!(container.is_registered::<dyn UserService>());
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn test_transient_services_do_not_share_storage() {
        let app = App::new();
        let first = app.user_service().unwrap();
        let second = app.user_service().unwrap();

        first.add("user1@email.com", "user1", "secret");
        assert_eq!(first.get_all().len(), 1);
        assert!(second.get_all().is_empty());
    }

    #[test]
    fn test_singleton_repository_is_shared() {
        let app = App::with_config(&AppConfig::new().with_lifetime(Lifetime::Singleton));
        let first = app.user_service().unwrap();
        let second = app.user_service().unwrap();

        first.add("user1@email.com", "user1", "secret");
        assert_eq!(second.get("user1@email.com").unwrap().name(), "user1");
    }

    #[test]
    fn test_seed_users_loaded_into_repository() {
        let config = AppConfig::new()
            .with_user("seed1@email.com", "seed1", "secret")
            .with_user("seed2@email.com", "seed2", "secret");
        let service = App::with_config(&config).user_service().unwrap();

        let names: Vec<String> = service
            .get_all()
            .iter()
            .map(|u| u.name().to_string())
            .collect();
        assert_eq!(names, vec!["seed1", "seed2"]);
    }
}
