//! `devutils base`: the number base converter.

use tracing::debug;

use devutils_core::base::convert_base;
use devutils_core::{BaseField, BaseValues, Radix};

use crate::app::AppContext;
use crate::cli::BaseArgs;
use crate::clipboard::copy_to_clipboard;
use crate::errors::CliError;
use crate::output::{base_values_json, print_base_values};
use crate::ui::{badge, header, kv, print, Badge, UiContext};

use super::session::run_base_session;

pub fn handle_base(app: &AppContext, args: &BaseArgs) -> anyhow::Result<()> {
    let ctx = app.ui_context();
    let custom_base = app.custom_base(args.custom_base)?;

    if args.session {
        return run_base_session(app, &ctx, BaseValues::new(custom_base));
    }

    let value = args
        .value
        .as_deref()
        .ok_or_else(|| CliError::invalid_input("Missing VALUE"))?;

    if let (Some(from), Some(to)) = (args.from_base, args.to_base) {
        return handle_direct(app, &ctx, args, value, from, to);
    }

    let field = args.from.unwrap_or(BaseField::Decimal);
    let mut state = BaseValues::new(custom_base);
    if !state.edit(field, value) {
        return Err(CliError::invalid_input_with_hint(
            format!(
                "\"{}\" is not valid for {} (base {})",
                value,
                field,
                state.effective_base(field)
            ),
            "Digits are 0-9 then a-z; a base-N value uses only the first N of them.",
        )
        .into());
    }

    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&base_values_json(&state))?);
    } else {
        if !app.quiet() {
            print(&ctx, &header(&ctx, "base", Some(&format!("from {}", field))));
        }
        print_base_values(&ctx, &state, Some(field));
    }

    if args.copy {
        copy_value(app, &ctx, &state.decimal);
    }
    Ok(())
}

fn handle_direct(
    app: &AppContext,
    ctx: &UiContext,
    args: &BaseArgs,
    value: &str,
    from: Radix,
    to: Radix,
) -> anyhow::Result<()> {
    let result = convert_base(value, from, to).map_err(|e| {
        CliError::invalid_input(format!("\"{}\" is not valid in base {}: {}", value, from, e))
    })?;
    debug!(%from, %to, %result, "direct conversion");

    if ctx.mode.is_json() {
        let output = serde_json::json!({
            "value": value,
            "from_base": from.get(),
            "to_base": to.get(),
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if ctx.mode.is_pretty() {
        if !app.quiet() {
            let context = format!("{} to {}", from, to);
            print(ctx, &header(ctx, "base", Some(&context)));
        }
        print(ctx, &kv(ctx, "Result", &result));
    } else {
        print(ctx, &result);
    }

    if args.copy {
        copy_value(app, ctx, &result);
    }
    Ok(())
}

/// Copy `text`; the outcome goes to stderr so stdout stays parseable.
pub fn copy_value(app: &AppContext, ctx: &UiContext, text: &str) {
    let copied = copy_to_clipboard(text);
    if app.quiet() || ctx.mode.is_json() {
        return;
    }
    if copied {
        eprintln!("{}", badge(ctx, Badge::Ok, "Copied to clipboard"));
    } else {
        eprintln!("{}", badge(ctx, Badge::Warn, "Clipboard unavailable"));
    }
}
