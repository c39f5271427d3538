//! `devutils time`: the unix time converter.

use std::fmt;
use std::io::Write;

use chrono::{Local, TimeZone, Utc};
use tracing::debug;

use devutils_core::time::{format_pattern, relative_time, TimeConverter, INVALID_INPUT_MESSAGE};
use devutils_core::{InputFormat, TimeState};

use crate::app::{AppContext, Zone};
use crate::cli::TimeArgs;
use crate::errors::CliError;
use crate::output::{print_time_view, time_json};
use crate::ticker::Ticker;
use crate::ui::{header, kv, print, UiContext};

use super::base::copy_value;
use super::session::run_time_session;

pub fn handle_time(app: &AppContext, args: &TimeArgs) -> anyhow::Result<()> {
    let zone = app.zone(args.tz.as_deref())?;
    match zone {
        Zone::Local => run(app, args, Local, &zone),
        Zone::Named(tz) => run(app, args, tz, &zone),
    }
}

fn run<Tz>(app: &AppContext, args: &TimeArgs, tz: Tz, zone: &Zone) -> anyhow::Result<()>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let ctx = app.ui_context();
    let format = app.input_format(args.input_format)?;
    let zone_name = zone.to_string();
    let mut conv = TimeConverter::new(tz, format);

    if args.session {
        return run_time_session(app, &ctx, conv, &zone_name);
    }

    match args.input.as_deref() {
        Some(text) => {
            if !conv.set_input(text) {
                return Err(CliError::invalid_input_with_hint(
                    format!("\"{}\" has characters {} input does not allow", text, format),
                    format.hint(),
                )
                .into());
            }
        }
        None => conv.set_now(),
    }

    if let Some(target) = args.to {
        return print_converted(app, &ctx, args, conv, target);
    }

    let now = Utc::now();
    let pattern = match (args.pattern.as_deref(), conv.date()) {
        (Some(pattern), Some(date)) => Some(
            format_pattern(date, pattern)
                .map_err(|e| CliError::invalid_input(format!("Bad --pattern: {}", e)))?,
        ),
        _ => None,
    };

    if ctx.mode.is_json() {
        let mut output = time_json(&conv, &zone_name, &now);
        if let Some(value) = &pattern {
            output["pattern"] = serde_json::Value::String(value.clone());
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        if !app.quiet() {
            print(&ctx, &header(&ctx, "time", Some(format.as_str())));
        }
        print_time_view(&ctx, &conv, &zone_name, &now, pattern.as_deref());
    }

    if matches!(conv.state(), TimeState::Invalid) {
        return Err(CliError::invalid_input_with_hint(INVALID_INPUT_MESSAGE, format.hint()).into());
    }

    if args.copy {
        copy_value(app, &ctx, conv.input());
    }

    if args.watch {
        if let Some(date) = conv.date() {
            watch(&ctx, date, args.ticks)?;
        }
    }
    Ok(())
}

/// `--to`: switch formats as the converter would and print the new input.
fn print_converted<Tz>(
    app: &AppContext,
    ctx: &UiContext,
    args: &TimeArgs,
    mut conv: TimeConverter<Tz>,
    target: InputFormat,
) -> anyhow::Result<()>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if matches!(conv.state(), TimeState::Invalid) {
        return Err(
            CliError::invalid_input_with_hint(INVALID_INPUT_MESSAGE, conv.format().hint()).into(),
        );
    }
    let from = conv.format();
    conv.set_format(target);
    debug!(%from, to = %target, input = conv.input(), "format changed");

    if ctx.mode.is_json() {
        let output = serde_json::json!({
            "value": conv.input(),
            "format": target,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if ctx.mode.is_pretty() {
        print(ctx, &kv(ctx, target.description(), conv.input()));
    } else {
        print(ctx, conv.input());
    }

    if args.copy {
        copy_value(app, ctx, conv.input());
    }
    Ok(())
}

/// Reprint the relative time of `date` once a second.
fn watch<Tz>(ctx: &UiContext, date: &chrono::DateTime<Tz>, ticks: Option<u64>) -> anyhow::Result<()>
where
    Tz: TimeZone,
{
    let redraw = ctx.allows_redraw();
    let tz = date.timezone();
    let delivered = Ticker::every_second().limit(ticks).run(|_| {
        let now = Utc::now().with_timezone(&tz);
        let relative = relative_time(date, &now);
        if ctx.mode.is_json() {
            println!("{}", serde_json::json!({ "relative": relative }));
        } else if redraw {
            let mut stdout = std::io::stdout();
            let _ = write!(stdout, "\r\x1b[2K{}", kv(ctx, "Relative", &relative));
            let _ = stdout.flush();
        } else {
            print(ctx, &kv(ctx, "relative", &relative));
        }
    })?;
    if redraw && delivered > 0 {
        println!();
    }
    Ok(())
}
