//! # DevUtils Core
//!
//! Conversion engines behind the `devutils` command-line tools.
//!
//! This crate holds the pure conversion logic, independent of any front end.
//! Every operation is synchronous and free of side effects; callers own the
//! view state and feed it events.
//!
//! ## Architecture
//!
//! - **base**: radix validation/conversion and the five synchronized fields
//! - **expr**: sandboxed arithmetic for numeric time input
//! - **time**: time input parsing, renderings, relative time, converter state

pub mod base;
pub mod error;
pub mod expr;
pub mod time;

pub use base::{BaseField, BaseValues, Radix};
pub use error::{DevUtilsError, Result};
pub use time::{InputFormat, TimeConverter, TimeState};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
