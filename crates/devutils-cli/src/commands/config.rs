//! `devutils config`: locate, show, and create the config file.

use crate::app::AppContext;
use crate::cli::{ConfigArgs, ConfigInitArgs, ConfigSubcommand};
use crate::config::{render_config, write_config, DevUtilsConfig};
use crate::errors::CliError;
use crate::ui::{header, kv, print, receipt};

pub fn handle_config(app: &AppContext, args: &ConfigArgs) -> anyhow::Result<()> {
    match &args.command {
        ConfigSubcommand::Path => handle_path(app),
        ConfigSubcommand::Show => handle_show(app),
        ConfigSubcommand::Init(init_args) => handle_init(app, init_args),
    }
}

fn handle_path(app: &AppContext) -> anyhow::Result<()> {
    let ctx = app.ui_context();
    let location = app.config_location()?;
    let exists = location.path.exists();
    let path = location.path.display().to_string();

    if ctx.mode.is_json() {
        let output = serde_json::json!({
            "path": path,
            "exists": exists,
            "explicit": location.explicit,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if ctx.mode.is_pretty() {
        print(&ctx, &kv(&ctx, "Config", &path));
        print(&ctx, &kv(&ctx, "Exists", if exists { "yes" } else { "no" }));
    } else {
        print(&ctx, &path);
    }
    Ok(())
}

fn handle_show(app: &AppContext) -> anyhow::Result<()> {
    let config = app.config()?;
    let ctx = app.ui_context();

    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }
    if !app.quiet() {
        let location = app.config_location()?;
        print(&ctx, &header(&ctx, "config", Some(&location.path.display().to_string())));
    }
    print(&ctx, render_config(config)?.trim_end());
    Ok(())
}

fn handle_init(app: &AppContext, args: &ConfigInitArgs) -> anyhow::Result<()> {
    let location = app.config_location()?;
    if location.path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", location.path.display()),
            "Pass --force to overwrite it.",
        )
        .into());
    }
    write_config(&location.path, &DevUtilsConfig::default())?;

    let ctx = app.ui_context();
    let path = location.path.display().to_string();
    if ctx.mode.is_json() {
        let output = serde_json::json!({ "status": "ok", "path": path });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !app.quiet() {
        print(&ctx, &receipt(&ctx, "Wrote config", &[("Path", path.as_str())]));
    }
    Ok(())
}
