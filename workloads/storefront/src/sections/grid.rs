//! Product grid section renderer.

use std::time::Duration;

use boutique_commerce::catalog::{Catalog, Product};

use super::escape_html;

/// Delay between successive cards fading in as they scroll into view.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// Render the product grid.
pub fn render_grid(catalog: &Catalog) -> String {
    let cards: String = catalog
        .iter()
        .enumerate()
        .map(|(index, product)| render_product_card(product, index))
        .collect();

    format!(r#"<section class="products-grid" id="productsGrid" data-section="grid">{cards}</section>"#)
}

/// Render a single product card.
///
/// `index` is the card's position in the grid and drives its reveal delay.
pub fn render_product_card(product: &Product, index: usize) -> String {
    let delay_ms = REVEAL_STAGGER.as_millis() * index as u128;
    format!(
        r#"
    <div class="product-card" data-id="{id}" style="--reveal-delay: {delay_ms}ms">
        <img src="{image}" alt="{name}" class="product-image" id="productImg-{id}">
        <div class="product-info">
            <h3>{name}</h3>
            <button class="add-to-cart-btn" data-action="add-to-cart" data-product-id="{id}">Add to Cart</button>
        </div>
    </div>"#,
        id = product.id,
        image = escape_html(&product.image_ref),
        name = escape_html(&product.name),
        delay_ms = delay_ms,
    )
}
