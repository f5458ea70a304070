//! Full page shell.

use boutique_commerce::catalog::Catalog;

use super::{render_badge, render_grid, Badge};

/// Render the whole storefront document.
///
/// `drawer_html` is the already-rendered drawer contents (see
/// [`super::render_cart_items`]); `drawer_open` toggles the `active` class on
/// the drawer and its overlay.
pub fn render_page(
    catalog: &Catalog,
    badge: &Badge,
    drawer_open: bool,
    drawer_html: &str,
) -> String {
    let active = if drawer_open { " active" } else { "" };
    let body_class = if drawer_open { r#" class="cart-open""# } else { "" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Boutique</title>
    <style>{styles}</style>
</head>
<body{body_class}>
    <header class="site-header">
        <h1>Boutique</h1>
        <button class="cart-icon" id="cartIcon" data-action="open-cart">Cart {badge}</button>
    </header>
    <main>
        {grid}
    </main>
    <div class="cart-overlay{active}" id="cartOverlay" data-action="close-cart"></div>
    <aside class="cart-drawer{active}" id="cartDrawer">
        <div class="cart-header">
            <h2>Your Cart</h2>
            <button class="close-btn" data-action="close-cart">&times;</button>
        </div>
        <div class="cart-items" id="cartItems">{drawer_html}</div>
        <button class="checkout-btn" data-action="checkout">Checkout</button>
    </aside>
    <div class="toast" id="toast"></div>
    <div id="flyingImageContainer"></div>
</body>
</html>"#,
        styles = PAGE_STYLES,
        badge = render_badge(badge),
        grid = render_grid(catalog),
    )
}

const PAGE_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #faf8f5; }
body.cart-open { overflow: hidden; }
.site-header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: #222; color: white; }
.cart-icon { position: relative; background: none; border: none; color: white; font-size: 1rem; cursor: pointer; }
.cart-icon.shake { animation: shake 0.5s; }
.cart-badge { position: absolute; top: -8px; right: -12px; background: #d33; border-radius: 50%; padding: 2px 7px; font-size: 0.75rem; }
.products-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1.5rem; padding: 2rem; }
.product-card { background: white; border-radius: 8px; overflow: hidden; opacity: 0; transform: translateY(20px); transition: opacity 0.5s, transform 0.5s; transition-delay: var(--reveal-delay, 0ms); }
.product-card.visible { opacity: 1; transform: none; }
.product-image { width: 100%; aspect-ratio: 3 / 4; object-fit: cover; }
.product-info { padding: 1rem; }
.add-to-cart-btn, .checkout-btn { width: 100%; padding: 0.75rem; border: none; border-radius: 4px; background: #222; color: white; cursor: pointer; }
.cart-overlay { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); display: none; }
.cart-overlay.active { display: block; }
.cart-drawer { position: fixed; top: 0; right: -400px; width: 400px; height: 100%; background: white; padding: 1.5rem; transition: right 0.3s; display: flex; flex-direction: column; }
.cart-drawer.active { right: 0; }
.cart-items { flex: 1; overflow-y: auto; }
.cart-item { display: flex; gap: 1rem; align-items: center; padding: 0.75rem 0; border-bottom: 1px solid #eee; }
.cart-item img { width: 64px; height: 64px; object-fit: cover; border-radius: 4px; }
.quantity-controls { display: flex; gap: 0.5rem; align-items: center; }
.empty-cart { text-align: center; color: #888; padding: 3rem 0; }
.empty-cart svg { width: 64px; height: 64px; }
.toast { position: fixed; bottom: 2rem; left: 50%; transform: translateX(-50%) translateY(100px); background: #222; color: white; padding: 0.75rem 1.5rem; border-radius: 4px; transition: transform 0.3s; }
.toast.show { transform: translateX(-50%) translateY(0); }
.flying-image { position: fixed; width: 80px; height: 80px; border-radius: 50%; object-fit: cover; z-index: 1000; transition: all 0.8s ease-in-out; }
.flying-image.fly { width: 20px; height: 20px; opacity: 0.5; }
@keyframes shake { 0%, 100% { transform: rotate(0); } 25% { transform: rotate(-10deg); } 75% { transform: rotate(10deg); } }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_closed_drawer() {
        let html = render_page(&Catalog::builtin(), &Badge::for_count(0), false, "");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"class="cart-drawer" id="cartDrawer""#));
        assert!(html.contains("<body>"));
        assert!(html.contains(r#"id="productsGrid""#));
    }

    #[test]
    fn test_page_open_drawer() {
        let html = render_page(&Catalog::builtin(), &Badge::for_count(2), true, "<p>items</p>");

        assert!(html.contains(r#"class="cart-drawer active""#));
        assert!(html.contains(r#"class="cart-overlay active""#));
        assert!(html.contains(r#"<body class="cart-open">"#));
        assert!(html.contains("<p>items</p>"));
        assert!(html.contains(">2</span>"));
    }
}
