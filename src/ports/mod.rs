//! Ports (trait boundaries) for the user domain.
//!
//! This module defines the capabilities that the container maps to concrete
//! implementations. Following hexagonal architecture, these traits are owned
//! by the domain and implemented by adapters and services.

pub mod repository;
pub mod service;

pub use repository::UserRepository;
pub use service::UserService;
