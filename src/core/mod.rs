//! # Core Module
//!
//! Configuration and shared response types.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod config;
pub mod response;

// Re-export commonly used items
pub use config::{Config, LookupConfig, DEFAULT_DEFINE_API_URL, DEFAULT_DEFINE_TIMEOUT_SECS};
pub use response::{truncate_for_message, CommandResponse, ResponseType, MESSAGE_LIMIT};
