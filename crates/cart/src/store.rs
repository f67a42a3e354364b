//! The cart store.
//!
//! [`CartStore`] owns the authoritative list of line items. Every operation is
//! total: invalid quantities are treated as removals and unknown IDs as
//! no-ops. After each mutating call the whole collection is saved through
//! [`CartPersistence`], then subscribers are told what changed.

use menulink_core::{CartLineItem, NewCartItem};

use crate::events::{CartEvent, Listeners, SubscriptionId};
use crate::persistence::CartPersistence;
use crate::storage::KeyValueStore;
use crate::summary::CartSummary;

/// In-memory cart mirrored into a key-value store.
///
/// Line items are kept in first-add order, but callers should treat the cart
/// as a set keyed by item ID.
#[derive(Debug)]
pub struct CartStore<S> {
    items: Vec<CartLineItem>,
    persistence: CartPersistence<S>,
    listeners: Listeners,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open a cart over `store` using the default storage key.
    #[must_use]
    pub fn open(store: S) -> Self {
        Self::with_persistence(CartPersistence::new(store))
    }

    /// Open a cart over a configured persistence adapter.
    ///
    /// The stored snapshot is read exactly once, here.
    #[must_use]
    pub fn with_persistence(persistence: CartPersistence<S>) -> Self {
        let items = persistence.load();
        Self {
            items,
            persistence,
            listeners: Listeners::default(),
        }
    }

    /// Add one unit of `item`.
    ///
    /// If the item is already in the cart its quantity goes up by one and the
    /// stored name and price are kept; the snapshot from the first add wins.
    pub fn add_item(&mut self, item: NewCartItem) {
        let event = if let Some(line) = self.find_mut(item.id.as_str()) {
            line.quantity = line.quantity.saturating_add(1);
            CartEvent::QuantityChanged {
                id: line.id.clone(),
                quantity: line.quantity,
            }
        } else {
            let id = item.id.clone();
            self.items.push(CartLineItem::first(item));
            CartEvent::Added { id }
        };
        self.commit(Some(event));
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line. A positive quantity for an
    /// ID that is not in the cart does nothing; only [`Self::add_item`] creates
    /// lines.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let event = self.find_mut(id).and_then(|line| {
            (line.quantity != quantity).then(|| {
                line.quantity = quantity;
                CartEvent::QuantityChanged {
                    id: line.id.clone(),
                    quantity,
                }
            })
        });
        self.commit(event);
    }

    /// Remove a line. Does nothing if `id` is not in the cart.
    pub fn remove_item(&mut self, id: &str) {
        let event = self
            .items
            .iter()
            .position(|line| line.id.as_str() == id)
            .map(|index| CartEvent::Removed {
                id: self.items.remove(index).id,
            });
        self.commit(event);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        let event = (!self.items.is_empty()).then_some(CartEvent::Cleared);
        self.items.clear();
        self.commit(event);
    }

    /// Quantity of `id` in the cart, or 0 if absent.
    #[must_use]
    pub fn get_quantity(&self, id: &str) -> u32 {
        self.items
            .iter()
            .find(|line| line.id.as_str() == id)
            .map_or(0, |line| line.quantity)
    }

    /// All line items.
    #[must_use]
    pub fn list_items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Aggregate counts and totals.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_items(&self.items)
    }

    /// Register a listener called after every change to the cart.
    ///
    /// The listener receives the event and the cart contents after the change.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&CartEvent, &[CartLineItem]) + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// The persistence adapter backing this cart.
    #[must_use]
    pub const fn persistence(&self) -> &CartPersistence<S> {
        &self.persistence
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|line| line.id.as_str() == id)
    }

    /// Save the snapshot, then publish `event` if the call changed anything.
    fn commit(&mut self, event: Option<CartEvent>) {
        self.persistence.save(&self.items);

        if let Some(event) = event {
            tracing::debug!(?event, lines = self.items.len(), "Cart changed");
            self.listeners.notify(&event, &self.items);
        }
    }
}
