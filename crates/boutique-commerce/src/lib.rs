//! Catalog, cart and cart store for Boutique.
//!
//! - **Catalog**: the closed, read-only list of products
//! - **Cart**: an insertion-ordered list of line items, one per product
//! - **CartStore**: owns the cart and mirrors it into local storage after
//!   every change
//!
//! # Example
//!
//! ```rust,ignore
//! use boutique_cache::FileStore;
//! use boutique_commerce::prelude::*;
//!
//! let mut store = CartStore::load(Catalog::builtin(), FileStore::open(".boutique")?);
//!
//! store.add_item(ProductId::new(1))?;
//! store.update_quantity(ProductId::new(1), 2)?;
//!
//! for item in store.snapshot() {
//!     println!("{} x{}", item.name, item.quantity);
//! }
//! println!("Items: {}", store.total_item_count());
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{Cart, CartLineItem, CartStore, DEFAULT_STORAGE_KEY};
}
