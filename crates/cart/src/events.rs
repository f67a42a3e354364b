//! Change notifications.
//!
//! Views that render cart state subscribe to the store instead of polling it.
//! A notification is published after every mutation that changed the cart,
//! once the new snapshot has been handed to persistence.

use std::fmt;

use menulink_core::{CartLineItem, MenuItemId};

/// What a mutation did to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A new line was created with quantity 1.
    Added { id: MenuItemId },
    /// An existing line's quantity changed (including repeat adds).
    QuantityChanged { id: MenuItemId, quantity: u32 },
    /// A line was removed, explicitly or by setting its quantity to zero.
    Removed { id: MenuItemId },
    /// All lines were removed.
    Cleared,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&CartEvent, &[CartLineItem])>;

/// Registered listeners, called in subscription order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl Listeners {
    pub(crate) fn subscribe(
        &mut self,
        listener: impl FnMut(&CartEvent, &[CartLineItem]) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: &CartEvent, items: &[CartLineItem]) {
        for (_, listener) in &mut self.entries {
            listener(event, items);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
