//! Product type and the built-in catalog.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Image location, relative to the page.
    #[serde(rename = "imageRef")]
    pub image_ref: String,
}

impl Product {
    /// Create a new product.
    pub fn new(id: u32, name: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            image_ref: image_ref.into(),
        }
    }
}

/// The products the storefront ships with: (id, name, image).
pub(crate) const BUILTIN_PRODUCTS: [(u32, &str, &str); 8] = [
    (1, "Classic Skirt", "images/skirt.JPG"),
    (2, "Chic Blouse", "images/blouse.JPG"),
    (3, "Wide-leg jeans", "images/jeans.JPG"),
    (4, "ECO Fur Jacket", "images/jacket.JPG"),
    (5, "Satin dress", "images/dress.JPG"),
    (6, "Cashmere Sweater", "images/sweater.JPG"),
    (7, "Classic trousers", "images/trousers.JPG"),
    (8, "Basic tshirt", "images/tshirt.JPG"),
];
