//! Output mode routing logic.

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly with colors and formatting (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules:
    /// 1. `--json` overrides everything (exclusive mode)
    /// 2. `--format plain` forces plain
    /// 3. `--format table` forces pretty, even when piped
    /// 4. `TERM=dumb` forces plain
    /// 5. Pretty only when stdout is TTY
    /// 6. Default to plain for non-TTY
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        // Rule 1: --json is exclusive
        if json_flag {
            return Self::Json;
        }

        // Rules 2 & 3: an explicit layout wins over detection
        match format_flag {
            Some("plain") => return Self::Plain,
            Some("table") => return Self::Pretty,
            _ => {}
        }

        // Rule 4: TERM=dumb forces plain
        if term_is_dumb {
            return Self::Plain;
        }

        // Rule 5 & 6: Pretty only on TTY
        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    /// Check if this mode should output JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Check if this mode should output pretty (human) format.
    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
