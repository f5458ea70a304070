//! Storefront command dispatch against a real cart store.

use boutique_cache::{CacheError, KvStore, MemoryStore};
use boutique_commerce::prelude::*;
use boutique_storefront::*;

fn storefront() -> Storefront<MemoryStore> {
    Storefront::new(CartStore::load(Catalog::builtin(), MemoryStore::new()))
}

fn id(n: u32) -> ProductId {
    ProductId::new(n)
}

#[test]
fn add_plays_fly_shake_toast() {
    let mut storefront = storefront();
    let dispatch = storefront.dispatch(Command::AddToCart(id(4)));

    assert_eq!(
        dispatch.effects,
        vec![
            Effect::FlyToCart {
                product_id: id(4),
                duration: FLY_DURATION,
            },
            Effect::ShakeCart {
                duration: SHAKE_DURATION,
            },
            Effect::toast("ECO Fur Jacket added to cart!"),
        ]
    );
    assert_eq!(dispatch.view.badge.count, 1);
    assert!(dispatch.view.badge.visible);
    assert!(dispatch.persist_error.is_none());
}

#[test]
fn add_unknown_product_does_nothing() {
    let mut storefront = storefront();
    let dispatch = storefront.dispatch(Command::AddToCart(id(99)));

    assert!(dispatch.effects.is_empty());
    assert_eq!(dispatch.view.badge.count, 0);
    assert!(!dispatch.view.badge.visible);
    assert!(storefront.store().storage().is_empty());
}

#[test]
fn stepper_and_remove_rerender_drawer() {
    let mut storefront = storefront();
    storefront.dispatch(Command::AddToCart(id(1)));
    storefront.dispatch(Command::OpenCart);

    let dispatch = storefront.dispatch(Command::ChangeQuantity { id: id(1), delta: 1 });
    assert!(dispatch.effects.is_empty());
    assert!(dispatch.view.drawer_html.contains(r#"<span class="quantity">2</span>"#));
    assert_eq!(dispatch.view.badge.count, 2);

    let dispatch = storefront.dispatch(Command::ChangeQuantity { id: id(1), delta: -2 });
    assert!(dispatch.view.drawer_html.contains("Your cart is empty"));
    assert_eq!(dispatch.view.badge.count, 0);

    storefront.dispatch(Command::AddToCart(id(2)));
    let dispatch = storefront.dispatch(Command::RemoveFromCart(id(2)));
    assert!(dispatch.view.drawer_html.contains("Your cart is empty"));
    assert!(dispatch.view.drawer_open);
}

#[test]
fn open_and_close_drawer() {
    let mut storefront = storefront();
    assert!(!storefront.drawer_open());

    let dispatch = storefront.dispatch(Command::OpenCart);
    assert!(dispatch.view.drawer_open);
    assert!(storefront.render_page().contains(r#"class="cart-drawer active""#));

    let dispatch = storefront.dispatch(Command::CloseCart);
    assert!(!dispatch.view.drawer_open);
    assert!(!storefront.render_page().contains("cart-drawer active"));
}

#[test]
fn checkout_empty_cart_only_toasts() {
    let mut storefront = storefront();
    let dispatch = storefront.dispatch(Command::Checkout);

    assert_eq!(dispatch.effects, vec![Effect::toast(EMPTY_CART_MESSAGE)]);
    assert!(storefront.store().storage().is_empty(), "no store call expected");
}

#[test]
fn checkout_clears_and_schedules_close() {
    let mut storefront = storefront();
    storefront.dispatch(Command::AddToCart(id(1)));
    storefront.dispatch(Command::AddToCart(id(3)));
    storefront.dispatch(Command::OpenCart);

    let dispatch = storefront.dispatch(Command::Checkout);
    assert_eq!(
        dispatch.effects,
        vec![
            Effect::toast(ORDER_PLACED_MESSAGE),
            Effect::CloseDrawerAfter {
                delay: CHECKOUT_CLOSE_DELAY,
            },
        ]
    );
    assert_eq!(dispatch.view.badge.count, 0);
    assert!(dispatch.view.drawer_open, "drawer closes when the delay fires");

    // The page sends CloseCart once the delay has passed
    let dispatch = storefront.dispatch(Command::CloseCart);
    assert!(!dispatch.view.drawer_open);
    assert!(!storefront.render_page().contains("cart-drawer active"));

    let storage = storefront.into_store().into_storage();
    assert_eq!(storage.get(DEFAULT_STORAGE_KEY).unwrap(), Some(b"[]".to_vec()));
}

#[test]
fn state_survives_restart() {
    let mut storefront = storefront();
    storefront.dispatch(Command::AddToCart(id(6)));
    storefront.dispatch(Command::AddToCart(id(6)));
    let storage = storefront.into_store().into_storage();

    let storefront = Storefront::new(CartStore::load(Catalog::builtin(), storage));
    let view = storefront.view();
    assert_eq!(view.badge.count, 2);
    assert!(view.drawer_html.contains("Cashmere Sweater"));
}

#[derive(Debug, Default)]
struct FailingStore;

impl KvStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &[u8]) -> Result<(), CacheError> {
        Err(CacheError::StoreError("disk full".to_string()))
    }

    fn delete(&mut self, _key: &str) -> Result<(), CacheError> {
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(Vec::new())
    }
}

#[test]
fn failed_write_still_completes_interaction() {
    let mut storefront = Storefront::new(CartStore::load(Catalog::builtin(), FailingStore));
    let dispatch = storefront.dispatch(Command::AddToCart(id(2)));

    assert_eq!(dispatch.effects.len(), 3);
    assert_eq!(dispatch.view.badge.count, 1);
    assert!(dispatch.persist_error.unwrap().contains("disk full"));
}

#[test]
fn dispatch_serializes_for_the_page() {
    let mut storefront = storefront();
    let dispatch = storefront.dispatch(Command::AddToCart(id(1)));
    let json = serde_json::to_value(&dispatch).unwrap();

    assert_eq!(json["effects"][0]["type"], "fly_to_cart");
    assert_eq!(json["effects"][2]["message"], "Classic Skirt added to cart!");
    assert_eq!(json["view"]["badge"]["count"], 1);
    assert!(json.get("persist_error").is_none());
}

#[test]
fn huge_quantity_keeps_badge_visible() {
    let mut storefront = storefront();
    storefront.dispatch(Command::AddToCart(id(1)));
    storefront.dispatch(Command::ChangeQuantity {
        id: id(1),
        delta: i64::MAX,
    });

    let dispatch = storefront.dispatch(Command::AddToCart(id(2)));
    assert_eq!(dispatch.view.badge.count, i64::MAX);
    assert!(dispatch.view.badge.visible);
}
