//! User management wired through a dependency injection container
//!
//! This crate provides:
//! - A `User` entity with generated identifiers
//! - Repository and service ports with in-memory and default implementations
//! - A small container mapping capabilities to construction rules, with
//!   transient and singleton lifetimes and cycle detection
//! - A composition root and CLI driver for the reference scenario

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod identifiers;
pub mod ports;
pub mod services;
pub mod user;

pub use app::{App, AppConfig, Container, ContainerBuilder, Lifetime};
pub use error::{Error, Result};
pub use identifiers::UserId;
pub use user::User;
