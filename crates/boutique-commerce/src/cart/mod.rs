//! Shopping cart module.
//!
//! Contains the cart, its line items, and the store that persists them.

mod cart;
mod store;

pub use cart::{Cart, CartLineItem};
pub use store::{CartStore, DEFAULT_STORAGE_KEY};
