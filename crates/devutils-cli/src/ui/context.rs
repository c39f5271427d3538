//! Terminal detection and the UI decisions derived from it.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Facts about the terminal, read once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub stdin_tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set
    pub no_color: bool,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stdin_tty: std::io::stdin().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// How output is rendered and whether the user can be prompted.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// stdout is a TTY
    pub is_tty: bool,
    /// stdin is a TTY; sessions prompt instead of reading lines
    pub stdin_tty: bool,
    pub color: bool,
    pub unicode: bool,
    pub mode: OutputMode,
}

impl UiContext {
    /// Detect the terminal and apply the global flags.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        Self::resolve(
            Terminal::detect(),
            json_flag,
            format_flag,
            no_color_flag,
            ascii_flag,
        )
    }

    /// Apply the global flags to a known terminal.
    ///
    /// Color needs a real, non-dumb TTY and no opt-out. `--format table`
    /// forces the pretty layout even when piped, but never color.
    pub fn resolve(
        term: Terminal,
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let mode = OutputMode::resolve(json_flag, format_flag, term.stdout_tty, term.dumb);
        Self {
            is_tty: term.stdout_tty,
            stdin_tty: term.stdin_tty,
            color: term.stdout_tty && !term.dumb && !term.no_color && !no_color_flag,
            unicode: !ascii_flag,
            mode,
        }
    }

    /// Sessions use line-editing prompts only with a TTY on both ends.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && self.stdin_tty
    }

    /// `time --watch` rewrites its line in place only on a pretty TTY.
    pub fn allows_redraw(&self) -> bool {
        self.is_tty && self.mode.is_pretty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty() -> Terminal {
        Terminal {
            stdout_tty: true,
            stdin_tty: true,
            dumb: false,
            no_color: false,
        }
    }

    #[test]
    fn test_tty_is_pretty_colored_and_interactive() {
        let ctx = UiContext::resolve(tty(), false, None, false, false);
        assert_eq!(ctx.mode, OutputMode::Pretty);
        assert!(ctx.color);
        assert!(ctx.unicode);
        assert!(ctx.is_interactive());
        assert!(ctx.allows_redraw());
    }

    #[test]
    fn test_piped_stdout_is_plain() {
        let term = Terminal {
            stdout_tty: false,
            ..tty()
        };
        let ctx = UiContext::resolve(term, false, None, false, false);
        assert_eq!(ctx.mode, OutputMode::Plain);
        assert!(!ctx.color);
        assert!(!ctx.is_interactive());
        assert!(!ctx.allows_redraw());
    }

    #[test]
    fn test_piped_stdin_disables_prompts_only() {
        let term = Terminal {
            stdin_tty: false,
            ..tty()
        };
        let ctx = UiContext::resolve(term, false, None, false, false);
        assert!(!ctx.is_interactive());
        assert!(ctx.allows_redraw());
    }

    #[test]
    fn test_color_opt_outs() {
        let no_color_env = Terminal {
            no_color: true,
            ..tty()
        };
        assert!(!UiContext::resolve(no_color_env, false, None, false, false).color);
        assert!(!UiContext::resolve(tty(), false, None, true, false).color);

        let dumb = Terminal { dumb: true, ..tty() };
        let ctx = UiContext::resolve(dumb, false, None, false, false);
        assert!(!ctx.color);
        assert_eq!(ctx.mode, OutputMode::Plain);
    }

    #[test]
    fn test_ascii_disables_unicode() {
        assert!(!UiContext::resolve(tty(), false, None, false, true).unicode);
    }

    #[test]
    fn test_json_never_redraws() {
        let ctx = UiContext::resolve(tty(), true, None, false, false);
        assert_eq!(ctx.mode, OutputMode::Json);
        assert!(!ctx.allows_redraw());
    }

    #[test]
    fn test_table_format_when_piped_is_pretty_without_color() {
        let ctx = UiContext::resolve(Terminal::default(), false, Some("table"), false, false);
        assert_eq!(ctx.mode, OutputMode::Pretty);
        assert!(!ctx.color);
        assert!(!ctx.allows_redraw());
        assert!(!ctx.is_interactive());
    }
}
