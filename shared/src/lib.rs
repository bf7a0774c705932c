//! Shared utilities and common types for the CoutureHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The uniform API response envelope
//! - Field validation helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig};
pub use types::{Envelope, ResponseStatus};
pub use utils::validation;
