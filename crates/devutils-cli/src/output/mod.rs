//! Output formatting helpers for the CLI.
//!
//! This module renders converter state in the active output mode
//! (JSON, table, plain `key=value` text).

mod json;
mod text;

// Re-export public API
pub use json::{base_values_json, time_json};
pub use text::{base_rows, print_base_values, print_time_view, time_rows};
