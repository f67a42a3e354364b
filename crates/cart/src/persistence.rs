//! Best-effort persistence of the cart snapshot.
//!
//! The cart is stored as a JSON array of line items under a single fixed key.
//! Neither direction ever fails from the caller's point of view:
//!
//! - `load` turns a missing, unreadable or malformed snapshot into an empty cart
//! - `save` drops write failures; the in-memory cart stays authoritative
//!
//! Degradation is still observable: every failure is logged with `tracing`
//! and passed to the optional diagnostic hook.

use std::collections::HashSet;
use std::fmt;

use menulink_core::CartLineItem;
use tracing::instrument;

use crate::storage::KeyValueStore;

/// Key the cart snapshot is stored under.
pub const CART_STORAGE_KEY: &str = "menu_link_cart_storage";

/// A recovered storage failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageDiagnostic {
    /// The snapshot could not be read; the cart started empty.
    ReadFailed(String),
    /// The snapshot was read but is not a valid cart; the cart started empty.
    Corrupt(String),
    /// The snapshot could not be written; it is stale until the next save.
    WriteFailed(String),
}

impl fmt::Display for StorageDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed(reason) => write!(f, "cart snapshot unreadable: {reason}"),
            Self::Corrupt(reason) => write!(f, "cart snapshot corrupt: {reason}"),
            Self::WriteFailed(reason) => write!(f, "cart snapshot not saved: {reason}"),
        }
    }
}

type DiagnosticHook = Box<dyn Fn(&StorageDiagnostic)>;

/// Mirrors the cart into a [`KeyValueStore`].
pub struct CartPersistence<S> {
    store: S,
    key: String,
    on_diagnostic: Option<DiagnosticHook>,
}

impl<S: fmt::Debug> fmt::Debug for CartPersistence<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartPersistence")
            .field("store", &self.store)
            .field("key", &self.key)
            .field("on_diagnostic", &self.on_diagnostic.is_some())
            .finish()
    }
}

impl<S: KeyValueStore> CartPersistence<S> {
    /// Persist under [`CART_STORAGE_KEY`].
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    /// Persist under a custom key.
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            on_diagnostic: None,
        }
    }

    /// Register a callback invoked for every recovered storage failure.
    #[must_use]
    pub fn on_diagnostic(mut self, hook: impl Fn(&StorageDiagnostic) + 'static) -> Self {
        self.on_diagnostic = Some(Box::new(hook));
        self
    }

    /// The storage key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored snapshot.
    ///
    /// Returns an empty collection when nothing is stored or the stored value
    /// is not a valid cart.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load(&self) -> Vec<CartLineItem> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No stored cart, starting empty");
                return Vec::new();
            }
            Err(e) => {
                self.report(StorageDiagnostic::ReadFailed(e.to_string()));
                return Vec::new();
            }
        };

        match decode_snapshot(&raw) {
            Ok(items) => {
                tracing::debug!(lines = items.len(), "Loaded stored cart");
                items
            }
            Err(reason) => {
                self.report(StorageDiagnostic::Corrupt(reason));
                Vec::new()
            }
        }
    }

    /// Write `items` as the new snapshot. Failures are reported, not returned.
    #[instrument(skip(self, items), fields(key = %self.key, lines = items.len()))]
    pub fn save(&mut self, items: &[CartLineItem]) {
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(e) => {
                self.report(StorageDiagnostic::WriteFailed(e.to_string()));
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, &json) {
            self.report(StorageDiagnostic::WriteFailed(e.to_string()));
        }
    }

    fn report(&self, diagnostic: StorageDiagnostic) {
        tracing::warn!(key = %self.key, "{diagnostic}");
        if let Some(hook) = &self.on_diagnostic {
            hook(&diagnostic);
        }
    }
}

/// Parse a stored snapshot and check the cart invariants.
///
/// A snapshot with duplicate IDs or zero quantities cannot have been written
/// by the cart store, so it is treated like any other corrupt value.
fn decode_snapshot(raw: &str) -> Result<Vec<CartLineItem>, String> {
    let items: Vec<CartLineItem> = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if item.quantity == 0 {
            return Err(format!("item {} has zero quantity", item.id));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(format!("item {} appears more than once", item.id));
        }
    }

    Ok(items)
}
