//! List the product catalog.

use anyhow::Result;
use boutique_commerce::catalog::Catalog;

use crate::context::Context;

/// Run the catalog command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = Catalog::builtin();

    if ctx.output.is_json() {
        ctx.output.json(catalog.products());
        return Ok(());
    }

    ctx.output.header("Catalog");
    let widths = [4, 20, 24];
    ctx.output.table_row(&["ID", "NAME", "IMAGE"], &widths);
    for product in &catalog {
        ctx.output.table_row(
            &[&product.id.to_string(), &product.name, &product.image_ref],
            &widths,
        );
    }
    Ok(())
}
