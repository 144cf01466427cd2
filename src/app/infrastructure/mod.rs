//! Infrastructure layer - external integrations and utilities.
//!
//! - Error types
//! - Logging setup
//! - Platform-specific dark mode detection

pub mod error;
pub mod logging;
pub mod platform;
