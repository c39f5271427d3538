//! Command handlers, one module per subcommand.

pub mod base;
pub mod config;
pub mod misc;
pub mod session;
pub mod time;
pub mod validate;
