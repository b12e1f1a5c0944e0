//! CLI command implementations.

pub mod config;
pub mod inspect;
pub mod replay;

use anyhow::{Context as _, Result};
use brew_menu::prelude::*;
use clap::{Args, Subcommand};

use crate::context::Context;

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Menu JSON file.
    #[arg(short, long)]
    pub menu: String,

    /// Product (size variant) to open.
    #[arg(short, long)]
    pub product: String,
}

/// Arguments for the replay command.
#[derive(Args)]
pub struct ReplayArgs {
    /// Menu JSON file.
    #[arg(short, long)]
    pub menu: String,

    /// JSON array of session events.
    #[arg(short, long)]
    pub script: String,

    /// Product to open (default: the first product on the menu).
    #[arg(short, long)]
    pub product: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Read a menu file relative to the working directory.
pub(crate) fn load_menu(path: &str, ctx: &Context) -> Result<Menu> {
    let path = ctx.resolve_path(path);
    ctx.output.debug(&format!("Loading menu: {}", path.display()));
    Menu::load(&path).with_context(|| format!("Failed to load menu: {}", path.display()))
}

/// Open a session on `product`, falling back to the first product on the menu.
pub(crate) fn open_session(
    menu: &Menu,
    product: Option<&str>,
    ctx: &Context,
) -> Result<CustomizationSession> {
    let product = match product {
        Some(id) => ProductId::new(id),
        None => menu
            .products()
            .next()
            .map(|p| p.id.clone())
            .context("Menu has no products")?,
    };

    let session = CustomizationSession::from_menu(menu, &product, ctx.config.customize.clone())
        .with_context(|| format!("Failed to open product {}", product))?;
    Ok(session)
}
