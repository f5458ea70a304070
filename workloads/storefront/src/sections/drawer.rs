//! Cart drawer section renderer.

use boutique_commerce::cart::CartLineItem;

use super::escape_html;

const CART_ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <circle cx="9" cy="21" r="1"></circle>
                <circle cx="20" cy="21" r="1"></circle>
                <path d="M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6"></path>
            </svg>"#;

/// Render the contents of the cart drawer.
///
/// Shows the empty-cart placeholder when there are no line items.
pub fn render_cart_items(items: &[CartLineItem]) -> String {
    if items.is_empty() {
        return render_empty_cart();
    }

    items.iter().map(render_cart_item).collect()
}

/// Render one line item with its quantity stepper and remove button.
pub fn render_cart_item(item: &CartLineItem) -> String {
    format!(
        r#"
    <div class="cart-item" data-id="{id}">
        <img src="{image}" alt="{name}">
        <div class="cart-item-info">
            <h4>{name}</h4>
            <div class="quantity-controls">
                <button class="qty-btn" data-action="change-quantity" data-product-id="{id}" data-delta="-1">-</button>
                <span class="quantity">{quantity}</span>
                <button class="qty-btn" data-action="change-quantity" data-product-id="{id}" data-delta="1">+</button>
            </div>
        </div>
        <button class="remove-btn" data-action="remove-from-cart" data-product-id="{id}">&times;</button>
    </div>"#,
        id = item.id,
        image = escape_html(&item.image_ref),
        name = escape_html(&item.name),
        quantity = item.quantity,
    )
}

/// Render the empty-cart placeholder.
pub fn render_empty_cart() -> String {
    format!(
        r#"
        <div class="empty-cart">
            {CART_ICON_SVG}
            <p>Your cart is empty</p>
        </div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use boutique_commerce::prelude::*;

    fn line(id: u32, name: &str, quantity: i64) -> CartLineItem {
        CartLineItem {
            id: ProductId::new(id),
            name: name.to_string(),
            image_ref: format!("images/{id}.JPG"),
            quantity,
        }
    }

    #[test]
    fn test_empty_cart() {
        let html = render_cart_items(&[]);
        assert!(html.contains("Your cart is empty"));
        assert!(html.contains("<svg"));
        assert!(!html.contains("cart-item"));
    }

    #[test]
    fn test_items_in_order() {
        let html = render_cart_items(&[line(2, "Chic Blouse", 1), line(1, "Classic Skirt", 3)]);

        let blouse = html.find("Chic Blouse").unwrap();
        let skirt = html.find("Classic Skirt").unwrap();
        assert!(blouse < skirt);
        assert!(html.contains(r#"<span class="quantity">3</span>"#));
        assert!(!html.contains("Your cart is empty"));
    }

    #[test]
    fn test_item_controls() {
        let html = render_cart_item(&line(5, "Satin dress", 2));

        assert!(html.contains(r#"data-product-id="5" data-delta="-1""#));
        assert!(html.contains(r#"data-product-id="5" data-delta="1""#));
        assert!(html.contains(r#"data-action="remove-from-cart" data-product-id="5""#));
    }

    #[test]
    fn test_item_escapes_stored_fields() {
        let html = render_cart_item(&line(1, "<script>", 1));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
