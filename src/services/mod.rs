//! Domain services built on top of the ports.

pub mod user_service;

pub use user_service::UserServiceImpl;
