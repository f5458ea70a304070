//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Path => show_paths(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("");
    ctx.output.info("[storage]");
    ctx.output
        .kv("dir", &ctx.config.storage.dir.display().to_string());
    ctx.output.kv("key", &ctx.config.storage.key);

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output
        .kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());
    ctx.output.kv("level", &ctx.config.logging.level);

    Ok(())
}

fn show_paths(ctx: &Context) -> Result<()> {
    let config = ctx
        .config_path
        .as_ref()
        .map(|path| path.display().to_string());
    let data_dir = ctx.data_dir();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "config": config,
            "data_dir": data_dir,
            "key": ctx.config.storage.key,
        }));
        return Ok(());
    }

    ctx.output
        .kv("config", config.as_deref().unwrap_or("(defaults)"));
    ctx.output.kv("data_dir", &data_dir.display().to_string());
    ctx.output.kv("key", &ctx.config.storage.key);
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
    tracing::debug!(path = %config_path.display(), "wrote default config");

    ctx.output
        .success(&format!("Created: {}", config_path.display()));
    Ok(())
}
