use devutils_core::base::validate;

use crate::app::AppContext;
use crate::cli::ValidateArgs;
use crate::errors::CliError;
use crate::ui::{badge, print, Badge};

pub fn handle_validate(app: &AppContext, args: &ValidateArgs) -> anyhow::Result<()> {
    let ctx = app.ui_context();
    let valid = validate(&args.text, args.base);

    if ctx.mode.is_json() {
        let output = serde_json::json!({
            "text": args.text,
            "base": args.base,
            "valid": valid,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if ctx.mode.is_pretty() {
        let (kind, word) = if valid {
            (Badge::Ok, "valid")
        } else {
            (Badge::Err, "invalid")
        };
        print(&ctx, &badge(&ctx, kind, &format!("{} in base {}", word, args.base)));
    } else {
        print(&ctx, if valid { "valid" } else { "invalid" });
    }

    if valid {
        Ok(())
    } else {
        Err(CliError::invalid_input(format!(
            "\"{}\" is not a valid base-{} number",
            args.text, args.base
        ))
        .into())
    }
}
