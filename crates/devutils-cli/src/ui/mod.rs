//! UI primitives for the DevUtils CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, color palette, symbols
//! - **Render**: Tables, headers, receipts, hints, formatted text
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, Badge};
//! use crate::ui::render::{header, kv, hint};
//!
//! let ctx = app.ui_context();
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! print(&ctx, &header(&ctx, "time", Some("unix")));
//! print(&ctx, &kv(&ctx, "Relative", "3d ago"));
//! ```

mod context;
pub mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{
    badge, blank_line, header, hint, kv, print, print_error, receipt, simple_table, table, Column,
};
