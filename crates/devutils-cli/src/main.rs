//! DevUtils CLI - number base and unix time converters for the terminal
//!
//! This is the command-line interface for DevUtils. It drives the conversion
//! engines in `devutils-core` and renders their state.

mod app;
mod cli;
mod clipboard;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;
mod ticker;
mod ui;

use clap::Parser;
use devutils_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{base, config as config_cmd, misc, time, validate};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context();
        let (message, hint) = split_error_hint(&e.to_string());
        let hint = hint.or_else(|| contextual_hint(&message));
        print_error(&ui_ctx, &message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Split an explicit "\nHint: ..." suffix off an error message.
fn split_error_hint(error: &str) -> (String, Option<String>) {
    for marker in ["\nHint: ", "\nhint: "] {
        if let Some(idx) = error.find(marker) {
            let hint = error[idx + marker.len()..].trim().to_string();
            return (error[..idx].to_string(), Some(hint));
        }
    }
    (error.to_string(), None)
}

/// Hints for common errors that do not carry their own.
fn contextual_hint(error: &str) -> Option<String> {
    let error_lower = error.to_lowercase();

    if error_lower.contains("failed to parse config") {
        return Some(
            "Check the TOML syntax; `devutils config init --force` rewrites defaults.".to_string(),
        );
    }

    if error_lower.contains("base-") && error_lower.contains("not a valid") {
        return Some("Digits are 0-9 then a-z; a base-N number uses the first N.".to_string());
    }

    None
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Base(args)) => {
            base::handle_base(ctx, args)?;
        }
        Some(Commands::Validate(args)) => {
            validate::handle_validate(ctx, args)?;
        }
        Some(Commands::Time(args)) => {
            time::handle_time(ctx, args)?;
        }
        Some(Commands::Config(args)) => {
            config_cmd::handle_config(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("DevUtils v{}", VERSION);
            println!("\nQuickstart:");
            println!("  devutils base 255");
            println!("  devutils base ff --from hex --custom-base 36");
            println!("  devutils time 1704067200");
            println!("  devutils time \"60*60*24\" --to iso");
            println!("  devutils time --session");
            println!("\nRun `devutils --help` for full usage.");
        }
    }

    Ok(())
}
