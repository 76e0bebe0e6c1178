//! Shared building blocks for the query-builder backend.

pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod utils;
