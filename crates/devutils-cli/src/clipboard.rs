//! Best-effort clipboard access through the platform copy tool.
//!
//! Failures are logged at debug level and otherwise ignored.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::constants::CLIPBOARD_ENV;

#[cfg(target_os = "macos")]
const CANDIDATES: &[&[&str]] = &[&["pbcopy"]];

#[cfg(windows)]
const CANDIDATES: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", windows)))]
const CANDIDATES: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Copy `text`, returning whether any tool accepted it.
///
/// `DEVUTILS_CLIPBOARD` replaces the platform tools with a single command
/// line (split on whitespace) that receives the text on stdin.
pub fn copy_to_clipboard(text: &str) -> bool {
    let commands: Vec<Vec<String>> = match std::env::var(CLIPBOARD_ENV) {
        Ok(value) if !value.trim().is_empty() => {
            vec![value.split_whitespace().map(str::to_string).collect()]
        }
        _ => CANDIDATES
            .iter()
            .map(|argv| argv.iter().map(|arg| arg.to_string()).collect())
            .collect(),
    };

    for argv in &commands {
        match pipe_to(argv, text) {
            Ok(()) => {
                debug!(program = %argv[0], "copied to clipboard");
                return true;
            }
            Err(err) => debug!(program = %argv[0], %err, "clipboard tool failed"),
        }
    }
    false
}

fn pipe_to(argv: &[String], text: &str) -> io::Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty clipboard command"))?;
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    // Close stdin before waiting, and reap the child even if the write failed.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("exited with {}", status),
        ))
    }
}
