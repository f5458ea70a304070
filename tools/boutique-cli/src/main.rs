//! Boutique CLI - Browse the catalog and manage a locally stored cart.
//!
//! Commands:
//! - `boutique catalog` - List products
//! - `boutique add` / `remove` / `qty` - Change the cart
//! - `boutique cart` - Show the cart
//! - `boutique checkout` - Place the order
//! - `boutique render` - Print storefront HTML
//! - `boutique config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{AddArgs, CheckoutArgs, ConfigArgs, QtyArgs, RemoveArgs, RenderArgs};
use config::{LogFormat, LoggingConfig};

/// Boutique CLI - A storefront cart kept on local disk
#[derive(Parser)]
#[command(name = "boutique")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Data directory (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog
    Catalog,

    /// Add one unit of a product to the cart
    Add(AddArgs),

    /// Remove a product line from the cart
    Remove(RemoveArgs),

    /// Change the quantity of a cart line
    Qty(QtyArgs),

    /// Show the cart
    Cart,

    /// Place the order and empty the cart
    Checkout(CheckoutArgs),

    /// Print storefront HTML for the current cart
    Render(RenderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let loaded =
        context::Context::load(cli.config.as_deref(), cli.data_dir.as_deref(), output.clone());
    let ctx = match loaded {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    init_tracing(&ctx.config.logging, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Catalog => commands::catalog::run(&ctx),
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Qty(args) => commands::cart::qty(args, &ctx),
        Commands::Cart => commands::cart::show(&ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for HTML and JSON output.
fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { logging.level.as_str() };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

    let json = logging.format == LogFormat::Json;
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
