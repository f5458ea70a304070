//! User commands and the presentation effects they produce.

use std::time::Duration;

use boutique_commerce::ProductId;
use serde::Serialize;

/// How long the product image takes to fly into the cart icon.
pub const FLY_DURATION: Duration = Duration::from_millis(800);
/// How long the cart icon shakes after an add.
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);
/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(2500);
/// Delay before the drawer closes itself after checkout.
pub const CHECKOUT_CLOSE_DELAY: Duration = Duration::from_millis(1500);

/// A user action on the storefront page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// "Add to cart" on a product card.
    AddToCart(ProductId),
    /// The remove button on a cart line.
    RemoveFromCart(ProductId),
    /// The `-` / `+` stepper on a cart line.
    ChangeQuantity { id: ProductId, delta: i64 },
    /// The cart icon.
    OpenCart,
    /// The close button or the overlay.
    CloseCart,
    /// The checkout button.
    Checkout,
}

impl Command {
    /// Short name, used for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddToCart(_) => "add_to_cart",
            Command::RemoveFromCart(_) => "remove_from_cart",
            Command::ChangeQuantity { .. } => "change_quantity",
            Command::OpenCart => "open_cart",
            Command::CloseCart => "close_cart",
            Command::Checkout => "checkout",
        }
    }
}

/// Fire-and-forget feedback for the page to play.
///
/// Durations are data only; nothing here waits on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Animate the product image from its card into the cart icon.
    FlyToCart {
        product_id: ProductId,
        #[serde(serialize_with = "millis::serialize")]
        duration: Duration,
    },
    /// Shake the cart icon.
    ShakeCart {
        #[serde(serialize_with = "millis::serialize")]
        duration: Duration,
    },
    /// Show a short message.
    Toast {
        message: String,
        #[serde(serialize_with = "millis::serialize")]
        duration: Duration,
    },
    /// Close the cart drawer after a delay.
    ///
    /// The drawer stays open in the storefront state until the page
    /// dispatches [`Command::CloseCart`] when the delay has passed.
    CloseDrawerAfter {
        #[serde(serialize_with = "millis::serialize")]
        delay: Duration,
    },
}

impl Effect {
    /// A toast with the standard duration.
    pub fn toast(message: impl Into<String>) -> Self {
        Effect::Toast {
            message: message.into(),
            duration: TOAST_DURATION,
        }
    }

    /// The toast message, if this is a toast.
    pub fn toast_message(&self) -> Option<&str> {
        match self {
            Effect::Toast { message, .. } => Some(message),
            _ => None,
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }
}
