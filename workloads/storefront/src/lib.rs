//! Storefront presentation layer.
//!
//! Turns user actions into cart store calls and renders the page:
//! - [`Command`] - one variant per user action
//! - [`Storefront`] - dispatches a command to the cart store, then re-renders
//! - [`Effect`] - animation and toast feedback for the page to play
//! - [`sections`] - HTML renderers for the grid, drawer, badge and page shell
//!
//! # Example
//!
//! ```
//! use boutique_cache::MemoryStore;
//! use boutique_commerce::prelude::*;
//! use boutique_storefront::{Command, Storefront};
//!
//! let store = CartStore::load(Catalog::builtin(), MemoryStore::new());
//! let mut storefront = Storefront::new(store);
//!
//! let dispatch = storefront.dispatch(Command::AddToCart(ProductId::new(1)));
//! assert_eq!(dispatch.view.badge.count, 1);
//! assert_eq!(dispatch.toasts().next(), Some("Classic Skirt added to cart!"));
//! ```

mod command;
pub mod sections;
mod storefront;

pub use command::{
    Command, Effect, CHECKOUT_CLOSE_DELAY, FLY_DURATION, SHAKE_DURATION, TOAST_DURATION,
};
pub use storefront::{Dispatch, Storefront, View, EMPTY_CART_MESSAGE, ORDER_PLACED_MESSAGE};
