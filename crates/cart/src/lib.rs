//! MenuLink cart.
//!
//! The cart is the only stateful piece of the menu viewer: a keyed collection
//! of line items that outlives navigation and survives a reload by mirroring
//! itself into a local key-value store.
//!
//! # Architecture
//!
//! - [`storage`] - Key-value store abstraction with in-memory and file backends
//! - [`persistence`] - Best-effort snapshot of the cart under a fixed key
//! - [`store`] - [`CartStore`], the sole owner of the line items
//! - [`context`] - [`CartContext`], a cloneable handle shared between views
//! - [`events`] - Change notifications published after each mutation
//! - [`summary`] - Aggregates for the floating cart button and totals
//! - [`pager`] - Page-at-a-time reveal of long menu categories
//! - [`order`] - Order message and WhatsApp checkout link
//!
//! # Example
//!
//! ```rust
//! use menulink_cart::{CartStore, MemoryStore};
//! use menulink_core::{NewCartItem, Price};
//!
//! let mut cart = CartStore::open(MemoryStore::new());
//! let soup = NewCartItem::new("a", "Soup", Price::parse("100").unwrap());
//!
//! cart.add_item(soup.clone());
//! cart.add_item(soup);
//! assert_eq!(cart.get_quantity("a"), 2);
//!
//! cart.set_quantity("a", 0);
//! assert!(cart.list_items().is_empty());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod context;
pub mod events;
pub mod order;
pub mod pager;
pub mod persistence;
pub mod storage;
pub mod store;
pub mod summary;

pub use context::CartContext;
pub use events::{CartEvent, SubscriptionId};
pub use order::{OrderMessage, checkout_link, whatsapp_link};
pub use pager::{DEFAULT_PAGE_SIZE, MenuPager};
pub use persistence::{CART_STORAGE_KEY, CartPersistence, StorageDiagnostic};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::CartStore;
pub use summary::CartSummary;
