//! Line-driven sessions over the two converters.
//!
//! Each line is one event (an edit, a radix or format change, a copy); the
//! affected view is reprinted after every state change.

use std::fmt;
use std::io::{self, BufRead};

use chrono::{TimeZone, Utc};
use dialoguer::Input;
use tracing::debug;

use devutils_core::time::TimeConverter;
use devutils_core::{BaseField, BaseValues, InputFormat, Radix};

use crate::app::AppContext;
use crate::clipboard::copy_to_clipboard;
use crate::output::{base_values_json, print_base_values, print_time_view, time_json, time_rows};
use crate::ui::{badge, blank_line, header, hint, print, Badge, UiContext};

const BASE_HELP: &str =
    "<field> <text> | <field> (clear) | base <N> | show | copy <field> | quit";
const TIME_HELP: &str = "input <text> | format <unix|ms|iso> | now | show | copy [key] | quit";

/// Lines from an interactive prompt or from piped stdin.
pub struct LineSource {
    interactive: bool,
    lines: io::Lines<io::StdinLock<'static>>,
}

impl LineSource {
    pub fn stdin(interactive: bool) -> Self {
        Self {
            interactive,
            lines: io::stdin().lock().lines(),
        }
    }

    /// Next line, or `None` at end of input.
    pub fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        if self.interactive {
            return match Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
            {
                Ok(line) => Ok(Some(line)),
                Err(err) => {
                    debug!(%err, "prompt closed");
                    Ok(None)
                }
            };
        }
        match self.lines.next() {
            Some(line) => line
                .map(Some)
                .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e)),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseCommand {
    /// Typed text for a field; empty text clears every field
    Edit(BaseField, String),
    SetBase(Radix),
    Show,
    Copy(BaseField),
    Help,
    Quit,
}

/// Parse one session line; blank lines yield `None`.
pub fn parse_base_command(line: &str) -> Result<Option<BaseCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    let command = match head.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => BaseCommand::Quit,
        "show" => BaseCommand::Show,
        "help" | "?" => BaseCommand::Help,
        "base" => {
            let radix = rest.parse::<Radix>().map_err(|e| e.to_string())?;
            BaseCommand::SetBase(radix)
        }
        "copy" => {
            let field = rest.parse::<BaseField>().map_err(|e| e.to_string())?;
            BaseCommand::Copy(field)
        }
        other => {
            let field = other
                .parse::<BaseField>()
                .map_err(|_| format!("Unknown command \"{}\" (try: {})", other, BASE_HELP))?;
            BaseCommand::Edit(field, rest.to_string())
        }
    };
    Ok(Some(command))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeCommand {
    /// Replace the raw input; empty text clears it
    Input(String),
    Format(InputFormat),
    Now,
    Show,
    /// Copy the input (`input`) or a derived value by key
    Copy(String),
    Help,
    Quit,
}

/// Parse one session line; blank lines yield `None`.
pub fn parse_time_command(line: &str) -> Result<Option<TimeCommand>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };
    let command = match head.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => TimeCommand::Quit,
        "show" => TimeCommand::Show,
        "help" | "?" => TimeCommand::Help,
        "now" => TimeCommand::Now,
        "input" => TimeCommand::Input(rest.to_string()),
        "format" => {
            let format = rest.parse::<InputFormat>().map_err(|e| e.to_string())?;
            TimeCommand::Format(format)
        }
        "copy" if rest.is_empty() => TimeCommand::Copy("input".to_string()),
        "copy" => TimeCommand::Copy(rest.to_ascii_lowercase()),
        other => {
            return Err(format!(
                "Unknown command \"{}\" (try: {})",
                other, TIME_HELP
            ))
        }
    };
    Ok(Some(command))
}

/// Status line: a badge in text modes, an object in JSON mode.
fn notice(ctx: &UiContext, kind: Badge, message: &str) {
    if ctx.mode.is_json() {
        let level = match kind {
            Badge::Ok => "ok",
            Badge::Warn => "warn",
            Badge::Err => "error",
            Badge::Info => "info",
        };
        println!("{}", serde_json::json!({ "notice": level, "message": message }));
    } else {
        print(ctx, &badge(ctx, kind, message));
    }
}

fn copy_notice(ctx: &UiContext, text: &str) {
    if copy_to_clipboard(text) {
        notice(ctx, Badge::Ok, "Copied to clipboard");
    } else {
        notice(ctx, Badge::Warn, "Clipboard unavailable");
    }
}

fn emit_base(ctx: &UiContext, state: &BaseValues, active: Option<BaseField>) {
    if ctx.mode.is_json() {
        println!("{}", base_values_json(state));
    } else {
        print_base_values(ctx, state, active);
        blank_line(ctx);
    }
}

/// Drive the base synchronizer from stdin until `quit` or end of input.
pub fn run_base_session(
    app: &AppContext,
    ctx: &UiContext,
    mut state: BaseValues,
) -> anyhow::Result<()> {
    let mut source = LineSource::stdin(ctx.is_interactive());
    if !app.quiet() {
        print(ctx, &header(ctx, "base", Some("session")));
        if ctx.mode.is_pretty() {
            print(ctx, &hint(ctx, BASE_HELP));
        }
    }

    while let Some(line) = source.next_line("base")? {
        let command = match parse_base_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                notice(ctx, Badge::Warn, &message);
                continue;
            }
        };
        match command {
            BaseCommand::Quit => break,
            BaseCommand::Help => notice(ctx, Badge::Info, BASE_HELP),
            BaseCommand::Show => emit_base(ctx, &state, None),
            BaseCommand::Edit(field, text) => {
                if state.edit(field, &text) {
                    emit_base(ctx, &state, Some(field));
                } else {
                    notice(
                        ctx,
                        Badge::Warn,
                        &format!(
                            "\"{}\" is not valid for {} (base {}); kept previous values",
                            text,
                            field,
                            state.effective_base(field)
                        ),
                    );
                }
            }
            BaseCommand::SetBase(radix) => {
                state.set_custom_base(radix);
                emit_base(ctx, &state, Some(BaseField::Custom));
            }
            BaseCommand::Copy(field) => copy_notice(ctx, state.get(field)),
        }
    }
    Ok(())
}

fn emit_time<Tz>(ctx: &UiContext, conv: &TimeConverter<Tz>, zone: &str)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let now = Utc::now();
    if ctx.mode.is_json() {
        println!("{}", time_json(conv, zone, &now));
    } else {
        print_time_view(ctx, conv, zone, &now, None);
        blank_line(ctx);
    }
}

/// Drive the time converter from stdin until `quit` or end of input.
pub fn run_time_session<Tz>(
    app: &AppContext,
    ctx: &UiContext,
    mut conv: TimeConverter<Tz>,
    zone: &str,
) -> anyhow::Result<()>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut source = LineSource::stdin(ctx.is_interactive());
    if !app.quiet() {
        print(ctx, &header(ctx, "time", Some("session")));
        if ctx.mode.is_pretty() {
            print(ctx, &hint(ctx, TIME_HELP));
        }
    }

    while let Some(line) = source.next_line("time")? {
        let command = match parse_time_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                notice(ctx, Badge::Warn, &message);
                continue;
            }
        };
        match command {
            TimeCommand::Quit => break,
            TimeCommand::Help => notice(ctx, Badge::Info, TIME_HELP),
            TimeCommand::Show => emit_time(ctx, &conv, zone),
            TimeCommand::Input(text) => {
                if conv.set_input(&text) {
                    emit_time(ctx, &conv, zone);
                } else {
                    notice(
                        ctx,
                        Badge::Warn,
                        &format!(
                            "\"{}\" has characters {} input does not allow; kept \"{}\"",
                            text,
                            conv.format(),
                            conv.input()
                        ),
                    );
                }
            }
            TimeCommand::Format(format) => {
                conv.set_format(format);
                emit_time(ctx, &conv, zone);
            }
            TimeCommand::Now => {
                conv.set_now();
                emit_time(ctx, &conv, zone);
            }
            TimeCommand::Copy(key) => {
                let value = if key == "input" {
                    Some(conv.input().to_string())
                } else {
                    let details = conv.details(&Utc::now());
                    time_rows(details.as_ref(), None)
                        .into_iter()
                        .find(|row| row.key == key)
                        .map(|row| row.value)
                };
                match value {
                    Some(value) => copy_notice(ctx, &value),
                    None => notice(ctx, Badge::Warn, &format!("Nothing to copy for \"{}\"", key)),
                }
            }
        }
    }
    Ok(())
}
