//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let customize = &ctx.config.customize;
    ctx.output.info("[customize]");
    ctx.output.kv(
        "carry_forward_selection",
        &customize.carry_forward_selection.to_string(),
    );
    ctx.output.kv("keep_focus", &customize.keep_focus.to_string());
    ctx.output.kv(
        "currency",
        customize.currency.as_deref().unwrap_or("(none)"),
    );

    ctx.output.info("[output]");
    ctx.output.kv("nutrition", &ctx.config.output.nutrition.to_string());
    ctx.output.kv(
        "show_unselected",
        &ctx.config.output.show_unselected.to_string(),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
