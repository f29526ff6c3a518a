//! Application layer with dependency injection container.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           Application Layer (app)           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │   App / Container (DI, wiring)       │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ resolves                   │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Services                            │   │
//! │  │  - UserServiceImpl                   │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ injected with              │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Adapters                            │   │
//! │  │  - InMemoryUserRepository            │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ implements                 │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Ports                               │   │
//! │  │  - UserRepository, UserService       │   │
//! │  └──────────────────────────────────────┘   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use userdi::app::{App, AppConfig};
//!
//! let app = App::with_config(&AppConfig::new().with_user("a@email.com", "a", "secret"));
//! let service = app.user_service()?;
//! assert_eq!(service.get_all().len(), 1);
//! # Ok::<(), userdi::Error>(())
//! ```

pub mod config;
pub mod container;
pub mod wiring;

pub use config::{AppConfig, SeedUser};
pub use container::{Container, ContainerBuilder, Lifetime};
pub use wiring::{App, build_container};
