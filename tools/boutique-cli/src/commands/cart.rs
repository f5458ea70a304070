//! Cart commands: add, remove, qty and show.

use anyhow::Result;
use boutique_cache::KvStore;
use boutique_commerce::ProductId;
use boutique_storefront::{Command, Dispatch, Storefront};

use super::{AddArgs, QtyArgs, RemoveArgs};
use crate::context::Context;
use crate::output::badge;

/// Run the add command.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.open_storefront()?;

    if storefront.store().product(args.id).is_none() {
        ctx.output
            .warn(&format!("Product {} is not in the catalog", args.id));
    }

    let dispatch = storefront.dispatch(Command::AddToCart(args.id));
    report(&dispatch, ctx);
    Ok(())
}

/// Run the remove command.
pub fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.open_storefront()?;
    let name = line_name(&storefront, args.id);

    let dispatch = storefront.dispatch(Command::RemoveFromCart(args.id));
    match name {
        Some(name) => ctx.output.success(&format!("Removed {} from cart", name)),
        None => ctx
            .output
            .info(&format!("Product {} is not in the cart", args.id)),
    }
    report(&dispatch, ctx);
    Ok(())
}

/// Run the qty command.
pub fn qty(args: QtyArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.open_storefront()?;
    let Some(name) = line_name(&storefront, args.id) else {
        ctx.output
            .info(&format!("Product {} is not in the cart", args.id));
        return Ok(());
    };

    let dispatch = storefront.dispatch(Command::ChangeQuantity {
        id: args.id,
        delta: args.delta,
    });
    match storefront.store().get(args.id) {
        Some(item) => ctx
            .output
            .success(&format!("{} quantity is now {}", name, item.quantity)),
        None => ctx.output.success(&format!("Removed {} from cart", name)),
    }
    report(&dispatch, ctx);
    Ok(())
}

/// Run the cart command.
pub fn show(ctx: &Context) -> Result<()> {
    let storefront = ctx.open_storefront()?;
    let store = storefront.store();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": store.snapshot(),
            "total_item_count": store.total_item_count(),
        }));
        return Ok(());
    }

    ctx.output.header("Your Cart");
    if store.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    let widths = [4, 20, 8];
    ctx.output.table_row(&["ID", "NAME", "QTY"], &widths);
    for item in store.snapshot() {
        ctx.output.table_row(
            &[&item.id.to_string(), &item.name, &item.quantity.to_string()],
            &widths,
        );
    }
    ctx.output.kv("Items", &badge(store.total_item_count()));
    Ok(())
}

/// Print the toasts and badge produced by a dispatch.
pub(crate) fn report(dispatch: &Dispatch, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(dispatch);
        return;
    }

    for toast in dispatch.toasts() {
        ctx.output.success(toast);
    }
    if let Some(err) = &dispatch.persist_error {
        ctx.output.warn(&format!("Cart was not saved: {}", err));
    }
    ctx.output.kv("Items", &badge(dispatch.view.badge.count));
}

fn line_name<S: KvStore>(storefront: &Storefront<S>, id: ProductId) -> Option<String> {
    storefront.store().get(id).map(|item| item.name.clone())
}
