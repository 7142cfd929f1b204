//! Core Module - Infrastructure pieces of the application
//!
//! - Configuration
//! - Error handling
//! - Application state

pub mod config;
pub mod error;
pub mod state;

// Re-exports
pub use config::{Config, ConfigError};
pub use error::{ErrorKind, PetError};
pub use state::AppState;
