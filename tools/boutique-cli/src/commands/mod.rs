//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod render;

use boutique_commerce::ProductId;
use clap::{Args, Subcommand, ValueEnum};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product id from the catalog.
    pub id: ProductId,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product id of the line to remove.
    pub id: ProductId,
}

/// Arguments for the qty command.
#[derive(Args)]
pub struct QtyArgs {
    /// Product id of the line to change.
    pub id: ProductId,

    /// Amount to add; negative values decrease.
    #[arg(allow_hyphen_values = true)]
    pub delta: i64,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Which part of the page to render.
    #[arg(value_enum, default_value = "page")]
    pub target: RenderTarget,

    /// Render with the cart drawer open.
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RenderTarget {
    /// The product grid.
    Grid,
    /// The cart drawer contents.
    Drawer,
    /// The whole page.
    Page,
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
    /// Show where configuration and data live.
    Path,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
