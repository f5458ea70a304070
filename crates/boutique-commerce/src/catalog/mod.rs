//! Product catalog module.
//!
//! The catalog is closed and read-only for the lifetime of the process.

mod product;

pub use product::Product;

use crate::ids::ProductId;
use product::BUILTIN_PRODUCTS;

/// An ordered, read-only list of purchasable products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list.
    ///
    /// Ids must be unique; a later product reusing an earlier id is dropped.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut unique: Vec<Product> = Vec::new();
        for product in products {
            if unique.iter().any(|p| p.id == product.id) {
                tracing::warn!(product_id = %product.id, "duplicate catalog id ignored");
                continue;
            }
            unique.push(product);
        }
        Self { products: unique }
    }

    /// The eight products the storefront ships with.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_PRODUCTS
                .iter()
                .map(|&(id, name, image)| Product::new(id, name, image)),
        )
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Check if the catalog offers `id`.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// All products, in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
