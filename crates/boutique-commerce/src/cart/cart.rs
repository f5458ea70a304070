//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A shopping cart: an insertion-ordered list of line items.
///
/// At most one line item exists per product id, and every quantity is
/// positive. New products are appended; existing ones keep their position
/// when their quantity changes.
///
/// Serializes as a bare JSON array of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLineItem>", into = "Vec<CartLineItem>")]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from raw line items, restoring the cart invariants.
    ///
    /// Items with a quantity of zero or less are dropped. Repeated ids are
    /// folded into the first occurrence, summing quantities.
    pub fn from_items(items: impl IntoIterator<Item = CartLineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity <= 0 {
                tracing::debug!(
                    product_id = %item.id,
                    quantity = item.quantity,
                    "dropping non-positive line item"
                );
                continue;
            }
            match cart.items.iter_mut().find(|i| i.id == item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line item in place, or appends a new one with
    /// quantity 1.
    pub fn add_product(&mut self, product: &Product) -> &CartLineItem {
        match self.items.iter().position(|i| i.id == product.id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
                &*item
            }
            None => {
                self.items.push(CartLineItem::from_product(product));
                let last = self.items.len() - 1;
                &self.items[last]
            }
        }
    }

    /// Remove the line item for `id`.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() < len_before
    }

    /// Add `delta` to the quantity of the line item for `id`.
    ///
    /// If the resulting quantity is zero or less the line item is removed.
    /// Returns the new quantity (`0` when removed), or `None` if the cart
    /// holds no line item for `id`.
    pub fn adjust_quantity(&mut self, id: ProductId, delta: i64) -> Option<i64> {
        let index = self.items.iter().position(|i| i.id == id)?;
        let quantity = self.items[index].quantity.saturating_add(delta);
        if quantity <= 0 {
            self.items.remove(index);
            Some(0)
        } else {
            self.items[index].quantity = quantity;
            Some(quantity)
        }
    }

    /// Remove every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get total item count (sum of quantities, saturating at `i64::MAX`).
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |total, i| total.saturating_add(i.quantity))
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line item for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }
}

impl From<Vec<CartLineItem>> for Cart {
    fn from(items: Vec<CartLineItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<CartLineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

/// A line item in the cart.
///
/// Carries a copy of the product's display fields taken when it was first
/// added, so it renders even if the catalog later changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product this line refers to.
    pub id: ProductId,
    /// Product name (denormalized for display).
    #[serde(default)]
    pub name: String,
    /// Product image (denormalized for display).
    #[serde(rename = "imageRef", alias = "image", default)]
    pub image_ref: String,
    /// Quantity, always positive inside a [`Cart`].
    pub quantity: i64,
}

impl CartLineItem {
    /// Create a line item with quantity 1 from a catalog product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            image_ref: product.image_ref.clone(),
            quantity: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32) -> Product {
        Product::new(id, format!("Product {id}"), format!("images/{id}.jpg"))
    }

    fn item(id: u32, quantity: i64) -> CartLineItem {
        CartLineItem {
            quantity,
            ..CartLineItem::from_product(&product(id))
        }
    }

    fn quantities(cart: &Cart) -> Vec<(u32, i64)> {
        cart.items().iter().map(|i| (i.id.get(), i.quantity)).collect()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_product() {
        let mut cart = Cart::new();
        let line = cart.add_product(&product(1));

        assert_eq!(line.quantity, 1);
        assert_eq!(line.name, "Product 1");
        assert_eq!(line.image_ref, "images/1.jpg");
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        cart.add_product(&product(1));
        cart.add_product(&product(2));
        let line = cart.add_product(&product(1));
        assert_eq!(line.quantity, 2);

        // Existing line keeps its position
        assert_eq!(quantities(&cart), vec![(1, 2), (2, 1)]);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_adjust_quantity() {
        let mut cart = Cart::new();
        cart.add_product(&product(1));

        assert_eq!(cart.adjust_quantity(ProductId::new(1), 4), Some(5));
        assert_eq!(cart.adjust_quantity(ProductId::new(1), -2), Some(3));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_adjust_quantity_to_zero_removes() {
        let mut cart = Cart::new();
        cart.add_product(&product(1));
        cart.add_product(&product(1));

        assert_eq!(cart.adjust_quantity(ProductId::new(1), -2), Some(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_adjust_quantity_below_zero_removes() {
        let mut cart = Cart::new();
        cart.add_product(&product(1));
        cart.add_product(&product(2));

        assert_eq!(cart.adjust_quantity(ProductId::new(1), -10), Some(0));
        assert_eq!(quantities(&cart), vec![(2, 1)]);
    }

    #[test]
    fn test_adjust_missing_item() {
        let mut cart = Cart::new();
        assert_eq!(cart.adjust_quantity(ProductId::new(3), 1), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add_product(&product(1));

        assert!(!cart.remove(ProductId::new(99)));
        assert!(cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_product(&product(1));
        cart.add_product(&product(2));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_item_count_saturates() {
        let cart = Cart::from_items(vec![item(1, i64::MAX), item(2, 1)]);
        assert_eq!(cart.item_count(), i64::MAX);
    }

    #[test]
    fn test_from_items_normalizes() {
        let cart = Cart::from_items(vec![
            item(3, 2),
            item(1, 0),
            item(2, -4),
            item(3, 5),
            item(4, 1),
        ]);

        assert_eq!(quantities(&cart), vec![(3, 7), (4, 1)]);
    }

    #[test]
    fn test_serializes_as_array() {
        let mut cart = Cart::new();
        cart.add_product(&product(1));

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "id": 1, "name": "Product 1", "imageRef": "images/1.jpg", "quantity": 1 }
            ])
        );
    }

    #[test]
    fn test_deserialize_accepts_legacy_fields() {
        let json = r#"[
            { "id": 2, "name": "Chic Blouse", "image": "images/blouse.JPG", "quantity": 3 },
            { "id": 5, "quantity": 1 }
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();

        let blouse = cart.get(ProductId::new(2)).unwrap();
        assert_eq!(blouse.image_ref, "images/blouse.JPG");
        assert_eq!(blouse.quantity, 3);

        let bare = cart.get(ProductId::new(5)).unwrap();
        assert_eq!(bare.name, "");
        assert_eq!(bare.image_ref, "");
    }

    #[test]
    fn test_deserialize_normalizes() {
        let json = r#"[
            { "id": 1, "name": "A", "imageRef": "a", "quantity": 1 },
            { "id": 1, "name": "A", "imageRef": "a", "quantity": 2 },
            { "id": 2, "name": "B", "imageRef": "b", "quantity": 0 }
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(quantities(&cart), vec![(1, 3)]);
    }
}
