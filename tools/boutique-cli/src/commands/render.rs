//! Print HTML for the current storefront state.

use anyhow::Result;
use boutique_storefront::sections::render_grid;
use boutique_storefront::Command;

use super::{RenderArgs, RenderTarget};
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.open_storefront()?;
    if args.open {
        storefront.dispatch(Command::OpenCart);
    }

    let html = match args.target {
        RenderTarget::Grid => render_grid(storefront.store().catalog()),
        RenderTarget::Drawer => storefront.view().drawer_html,
        RenderTarget::Page => storefront.render_page(),
    };

    ctx.output.raw(&html);
    Ok(())
}
