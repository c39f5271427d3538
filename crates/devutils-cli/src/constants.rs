//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (explicit config file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input: rejected values, unparseable time input.
    pub const INVALID_INPUT: i32 = 4;
}

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "DEVUTILS_CONFIG";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "DEVUTILS_LOG";

/// Environment variable overriding the clipboard command.
pub const CLIPBOARD_ENV: &str = "DEVUTILS_CLIPBOARD";

/// Directory name under the XDG config home.
pub const APP_DIR: &str = "devutils";
