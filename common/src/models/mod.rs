//! Shared data models.

pub mod connection;
pub mod user;

// Re-export commonly used types
pub use connection::{ConnectionDescriptor, DbType, TestConnectionResponse};
pub use user::{CreateUserRequest, User};
