//! Place the order and empty the cart.

use anyhow::Result;
use boutique_storefront::Command;
use dialoguer::Confirm;

use super::cart::report;
use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.open_storefront()?;
    let units = storefront.store().total_item_count();

    if units > 0 && !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {} item(s)?", units))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.info("Checkout cancelled");
            return Ok(());
        }
    }

    let dispatch = storefront.dispatch(Command::Checkout);
    report(&dispatch, ctx);
    Ok(())
}
