//! Shared cart handle.
//!
//! Independent views (menu list, floating cart button, cart page) all need the
//! same cart. Rather than passing `&mut CartStore` around, the owner wraps it
//! in a [`CartContext`] and hands out clones. Every clone funnels through the
//! same operation set; nobody touches the line items directly.
//!
//! The handle is single-threaded (`!Send`), matching the UI event loop it
//! serves. Listeners registered through [`CartContext::subscribe`] run while
//! the cart is borrowed, so they must use the snapshot they are given rather
//! than calling back into the context.

use std::cell::RefCell;
use std::rc::Rc;

use menulink_core::{CartLineItem, NewCartItem};

use crate::events::{CartEvent, SubscriptionId};
use crate::storage::KeyValueStore;
use crate::store::CartStore;
use crate::summary::CartSummary;

/// Cloneable handle to a shared [`CartStore`].
#[derive(Debug)]
pub struct CartContext<S> {
    inner: Rc<RefCell<CartStore<S>>>,
}

impl<S> Clone for CartContext<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore> CartContext<S> {
    /// Share `store`.
    #[must_use]
    pub fn new(store: CartStore<S>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    /// Open a cart over `store` and share it.
    #[must_use]
    pub fn open(store: S) -> Self {
        Self::new(CartStore::open(store))
    }

    /// See [`CartStore::add_item`].
    pub fn add_item(&self, item: NewCartItem) {
        self.inner.borrow_mut().add_item(item);
    }

    /// See [`CartStore::set_quantity`].
    pub fn set_quantity(&self, id: &str, quantity: i64) {
        self.inner.borrow_mut().set_quantity(id, quantity);
    }

    /// See [`CartStore::remove_item`].
    pub fn remove_item(&self, id: &str) {
        self.inner.borrow_mut().remove_item(id);
    }

    /// See [`CartStore::clear`].
    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    /// See [`CartStore::get_quantity`].
    #[must_use]
    pub fn get_quantity(&self, id: &str) -> u32 {
        self.inner.borrow().get_quantity(id)
    }

    /// Copy of the current line items.
    #[must_use]
    pub fn list_items(&self) -> Vec<CartLineItem> {
        self.inner.borrow().list_items().to_vec()
    }

    /// Run `f` over the current line items without copying them.
    pub fn with_items<R>(&self, f: impl FnOnce(&[CartLineItem]) -> R) -> R {
        f(self.inner.borrow().list_items())
    }

    /// See [`CartStore::summary`].
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        self.inner.borrow().summary()
    }

    /// See [`CartStore::subscribe`].
    pub fn subscribe(
        &self,
        listener: impl FnMut(&CartEvent, &[CartLineItem]) + 'static,
    ) -> SubscriptionId {
        self.inner.borrow_mut().subscribe(listener)
    }

    /// See [`CartStore::unsubscribe`].
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.borrow_mut().unsubscribe(id)
    }
}
