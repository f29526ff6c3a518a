//! Configuration types for wiring the application.

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use super::container::Lifetime;
use crate::{Result, error::Error, user::User};

/// A user to place in the repository when it is constructed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedUser {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl SeedUser {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password: password.into(),
        }
    }

    /// Build a user from this seed. Each call generates a new identifier.
    pub fn to_user(&self) -> User {
        User::new(&self.email, &self.name, &self.password)
    }
}

impl fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedUser")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Configuration for building the application container.
///
/// # Examples
///
/// ```
/// use userdi::app::{AppConfig, Lifetime};
///
/// let config = AppConfig::new()
///     .with_lifetime(Lifetime::Singleton)
///     .with_user("admin@email.com", "admin", "secret");
///
/// assert_eq!(config.users.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Lifetime policy for the user repository registration
    pub lifetime: Lifetime,
    /// Users every newly constructed repository starts with, in order
    pub users: Vec<SeedUser>,
}

impl AppConfig {
    /// Create a configuration with defaults: transient repository, no users.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the repository lifetime policy.
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Append a seed user.
    pub fn with_user(
        mut self,
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.users.push(SeedUser::new(email, name, password));
        self
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// configuration document.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {path:?}"),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}
