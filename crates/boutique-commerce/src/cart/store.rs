//! Cart store: the authoritative cart plus its durable mirror.

use boutique_cache::{Cache, KvStore};

use crate::cart::{Cart, CartLineItem};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Storage key the cart is kept under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "cart";

/// Owns the cart and keeps it mirrored in a [`KvStore`].
///
/// The store is loaded once and then accepts operations until dropped.
/// Every mutating operation writes the whole cart back under one key before
/// returning. Anomalies degrade quietly:
///
/// - adding a product the catalog doesn't know is a no-op
/// - removing or adjusting a product not in the cart is a no-op
/// - a missing, unreadable or malformed stored cart loads as empty
///
/// The only error surfaced is a failed write, reported after the in-memory
/// cart has already been updated.
///
/// # Example
///
/// ```
/// use boutique_cache::MemoryStore;
/// use boutique_commerce::prelude::*;
///
/// let mut store = CartStore::load(Catalog::builtin(), MemoryStore::new());
/// store.add_item(ProductId::new(1)).unwrap();
/// store.add_item(ProductId::new(2)).unwrap();
/// store.add_item(ProductId::new(1)).unwrap();
///
/// assert_eq!(store.total_item_count(), 3);
/// assert_eq!(store.snapshot()[0].quantity, 2);
/// ```
#[derive(Debug)]
pub struct CartStore<S> {
    catalog: Catalog,
    cache: Cache<S>,
    key: String,
    cart: Cart,
}

impl<S: KvStore> CartStore<S> {
    /// Load the cart stored under [`DEFAULT_STORAGE_KEY`].
    pub fn load(catalog: Catalog, store: S) -> Self {
        Self::load_with_key(catalog, store, DEFAULT_STORAGE_KEY)
    }

    /// Load the cart stored under `key`.
    pub fn load_with_key(catalog: Catalog, store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let cache = Cache::new(store);

        let cart = match cache.get::<Cart>(&key) {
            Ok(Some(cart)) => {
                tracing::debug!(key = %key, items = cart.unique_item_count(), "loaded stored cart");
                cart
            }
            Ok(None) => {
                tracing::debug!(key = %key, "no stored cart, starting empty");
                Cart::new()
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "stored cart unreadable, starting empty");
                Cart::new()
            }
        };

        Self {
            catalog,
            cache,
            key,
            cart,
        }
    }

    /// Add one unit of a catalog product.
    ///
    /// Returns the updated line item, or `None` without touching storage
    /// when the catalog has no such product.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
    ) -> Result<Option<&CartLineItem>, CommerceError> {
        let Some(product) = self.catalog.get(product_id) else {
            tracing::debug!(%product_id, "add ignored, product not in catalog");
            return Ok(None);
        };
        let quantity = self.cart.add_product(product).quantity;
        tracing::debug!(%product_id, quantity, "item added");

        self.persist()?;
        Ok(self.cart.get(product_id))
    }

    /// Remove a product's line item.
    ///
    /// Returns whether a line item was removed. The cart is written back
    /// either way.
    pub fn remove_item(&mut self, product_id: ProductId) -> Result<bool, CommerceError> {
        let removed = self.cart.remove(product_id);
        tracing::debug!(%product_id, removed, "item removed");

        self.persist()?;
        Ok(removed)
    }

    /// Change a line item's quantity by `delta`.
    ///
    /// A resulting quantity of zero or less removes the line item. Returns
    /// the new quantity (`Some(0)` when removed), or `None` without touching
    /// storage when the product isn't in the cart.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        delta: i64,
    ) -> Result<Option<i64>, CommerceError> {
        let Some(quantity) = self.cart.adjust_quantity(product_id, delta) else {
            tracing::debug!(%product_id, delta, "update ignored, product not in cart");
            return Ok(None);
        };
        tracing::debug!(%product_id, delta, quantity, "quantity updated");

        self.persist()?;
        Ok(Some(quantity))
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.cart.clear();
        tracing::debug!("cart cleared");
        self.persist()
    }

    /// Sum of all line item quantities.
    pub fn total_item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Read-only view of the line items, in insertion order.
    pub fn snapshot(&self) -> &[CartLineItem] {
        self.cart.items()
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Get the line item for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.cart.get(product_id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Look up a catalog product.
    pub fn product(&self, product_id: ProductId) -> Option<&Product> {
        self.catalog.get(product_id)
    }

    /// The catalog this store adds from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Key the cart is stored under.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Borrow the storage backend.
    pub fn storage(&self) -> &S {
        self.cache.store()
    }

    /// Give the storage backend back, e.g. to load it again later.
    pub fn into_storage(self) -> S {
        self.cache.into_inner()
    }

    fn persist(&mut self) -> Result<(), CommerceError> {
        if let Err(e) = self.cache.set(&self.key, &self.cart) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist cart");
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boutique_cache::{CacheError, MemoryStore};

    fn id(n: u32) -> ProductId {
        ProductId::new(n)
    }

    fn store() -> CartStore<MemoryStore> {
        CartStore::load(Catalog::builtin(), MemoryStore::new())
    }

    fn stored_json(store: &CartStore<MemoryStore>) -> serde_json::Value {
        let raw = store.storage().get(store.storage_key()).unwrap().unwrap();
        serde_json::from_slice(&raw).unwrap()
    }

    /// A backend whose writes always fail.
    #[derive(Debug, Default)]
    struct ReadOnlyStore(MemoryStore);

    impl KvStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &[u8]) -> Result<(), CacheError> {
            Err(CacheError::StoreError("read-only".to_string()))
        }

        fn delete(&mut self, _key: &str) -> Result<(), CacheError> {
            Err(CacheError::StoreError("read-only".to_string()))
        }

        fn keys(&self) -> Result<Vec<String>, CacheError> {
            self.0.keys()
        }
    }

    #[test]
    fn test_add_item_persists() {
        let mut store = store();
        let line = store.add_item(id(3)).unwrap().unwrap();
        assert_eq!(line.name, "Wide-leg jeans");
        assert_eq!(line.quantity, 1);

        assert_eq!(
            stored_json(&store),
            serde_json::json!([
                { "id": 3, "name": "Wide-leg jeans", "imageRef": "images/jeans.JPG", "quantity": 1 }
            ])
        );
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let mut store = store();
        assert!(store.add_item(id(99)).unwrap().is_none());

        assert!(store.is_empty());
        assert!(store.storage().is_empty(), "nothing should be written");
    }

    #[test]
    fn test_update_missing_item_is_noop() {
        let mut store = store();
        assert_eq!(store.update_quantity(id(1), 1).unwrap(), None);
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_remove_writes_even_when_absent() {
        let mut store = store();
        assert!(!store.remove_item(id(1)).unwrap());
        assert_eq!(stored_json(&store), serde_json::json!([]));
    }

    #[test]
    fn test_custom_storage_key() {
        let mut store = CartStore::load_with_key(Catalog::builtin(), MemoryStore::new(), "bag");
        store.add_item(id(1)).unwrap();

        assert_eq!(store.storage_key(), "bag");
        assert!(store.storage().exists("bag").unwrap());
        assert!(!store.storage().exists(DEFAULT_STORAGE_KEY).unwrap());
    }

    #[test]
    fn test_unreadable_payloads_load_empty() {
        for payload in ["", "null", "{}", "not json", r#"[{"id":"x","quantity":1}]"#] {
            let backend = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, payload);
            let store = CartStore::load(Catalog::builtin(), backend);
            assert!(store.is_empty(), "payload {payload:?} should load as empty");
        }
    }

    #[test]
    fn test_write_failure_surfaces_after_mutation() {
        let mut store = CartStore::load(Catalog::builtin(), ReadOnlyStore::default());

        let result = store.add_item(id(1));
        assert!(matches!(result, Err(CommerceError::CacheError(_))));

        // In-memory state still reflects the add
        assert_eq!(store.total_item_count(), 1);
    }

    #[test]
    fn test_product_lookup() {
        let store = store();
        assert_eq!(store.product(id(8)).unwrap().name, "Basic tshirt");
        assert!(store.product(id(9)).is_none());
        assert_eq!(store.catalog().len(), 8);
    }
}
