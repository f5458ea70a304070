//! Command dispatch: one store call, then one re-render.

use boutique_cache::KvStore;
use boutique_commerce::cart::CartStore;
use boutique_commerce::{CommerceError, ProductId};
use serde::Serialize;

use crate::command::{Command, Effect, CHECKOUT_CLOSE_DELAY, FLY_DURATION, SHAKE_DURATION};
use crate::sections::{render_cart_items, render_page, Badge};

/// Toast shown when checking out with nothing in the cart.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty!";
/// Toast shown after a successful checkout.
pub const ORDER_PLACED_MESSAGE: &str = "Thank you for your order! \u{1f389}";

/// What the page should show after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Cart icon counter.
    pub badge: Badge,
    /// Whether the cart drawer is open.
    pub drawer_open: bool,
    /// Rendered drawer contents.
    pub drawer_html: String,
}

/// Result of dispatching one command.
#[derive(Debug, Clone, Serialize)]
pub struct Dispatch {
    /// Feedback to play, in order.
    pub effects: Vec<Effect>,
    /// Fresh view of the page state.
    pub view: View,
    /// Set when the cart changed in memory but could not be saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persist_error: Option<String>,
}

impl Dispatch {
    /// Toast messages among the effects.
    pub fn toasts(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().filter_map(Effect::toast_message)
    }
}

/// The storefront page state: the injected cart store plus drawer state.
///
/// All cart changes go through [`Storefront::dispatch`].
#[derive(Debug)]
pub struct Storefront<S> {
    store: CartStore<S>,
    drawer_open: bool,
}

impl<S: KvStore> Storefront<S> {
    /// Wrap a loaded cart store. The drawer starts closed.
    pub fn new(store: CartStore<S>) -> Self {
        Self {
            store,
            drawer_open: false,
        }
    }

    /// Handle one user command.
    ///
    /// Performs at most one cart store operation, then re-renders. Failed
    /// writes are logged and reported in [`Dispatch::persist_error`]; the
    /// interaction itself still completes.
    pub fn dispatch(&mut self, command: Command) -> Dispatch {
        let _span = tracing::debug_span!("dispatch", command = command.name()).entered();
        let mut effects = Vec::new();

        let result = match command {
            Command::AddToCart(id) => self.add_to_cart(id, &mut effects),
            Command::RemoveFromCart(id) => self.store.remove_item(id).map(drop),
            Command::ChangeQuantity { id, delta } => {
                self.store.update_quantity(id, delta).map(drop)
            }
            Command::OpenCart => {
                self.drawer_open = true;
                Ok(())
            }
            Command::CloseCart => {
                self.drawer_open = false;
                Ok(())
            }
            Command::Checkout => self.checkout(&mut effects),
        };

        let persist_error = result.err().map(|e| {
            tracing::warn!(error = %e, "cart change not saved");
            e.to_string()
        });

        Dispatch {
            effects,
            view: self.view(),
            persist_error,
        }
    }

    fn add_to_cart(
        &mut self,
        id: ProductId,
        effects: &mut Vec<Effect>,
    ) -> Result<(), CommerceError> {
        let Some(name) = self.store.product(id).map(|p| p.name.clone()) else {
            tracing::debug!(product_id = %id, "add for unknown product ignored");
            return Ok(());
        };

        effects.push(Effect::FlyToCart {
            product_id: id,
            duration: FLY_DURATION,
        });
        let result = self.store.add_item(id).map(drop);
        effects.push(Effect::ShakeCart {
            duration: SHAKE_DURATION,
        });
        effects.push(Effect::toast(format!("{name} added to cart!")));
        result
    }

    /// Clears a non-empty cart and schedules the drawer to close. The drawer
    /// state itself changes only when [`Command::CloseCart`] arrives.
    fn checkout(&mut self, effects: &mut Vec<Effect>) -> Result<(), CommerceError> {
        if self.store.is_empty() {
            effects.push(Effect::toast(EMPTY_CART_MESSAGE));
            return Ok(());
        }

        let units = self.store.total_item_count();
        effects.push(Effect::toast(ORDER_PLACED_MESSAGE));
        let result = self.store.clear();
        effects.push(Effect::CloseDrawerAfter {
            delay: CHECKOUT_CLOSE_DELAY,
        });
        tracing::info!(units, "order placed");
        result
    }

    /// Current view, rendered from a fresh read of the store.
    pub fn view(&self) -> View {
        View {
            badge: Badge::for_count(self.store.total_item_count()),
            drawer_open: self.drawer_open,
            drawer_html: render_cart_items(self.store.snapshot()),
        }
    }

    /// Render the whole page for the current state.
    pub fn render_page(&self) -> String {
        let view = self.view();
        render_page(
            self.store.catalog(),
            &view.badge,
            view.drawer_open,
            &view.drawer_html,
        )
    }

    /// Whether the cart drawer is open.
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Read access to the cart store.
    pub fn store(&self) -> &CartStore<S> {
        &self.store
    }

    /// Give the cart store back.
    pub fn into_store(self) -> CartStore<S> {
        self.store
    }
}
