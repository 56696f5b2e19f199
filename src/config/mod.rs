//! Configuration module for Bachat
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BachatPaths;
pub use settings::Settings;
