//! Application-level utilities for the DevUtils CLI.
//!
//! This module provides:
//! - Path resolution and loading for the config file
//! - Display time zone resolution
//! - The per-invocation [`AppContext`]

mod context;
mod resolver;
mod zone;

// Re-export public API
pub use context::AppContext;
pub use resolver::{load_config, resolve_config_path, ConfigLocation};
pub use zone::Zone;
