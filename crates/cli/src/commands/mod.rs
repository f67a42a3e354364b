//! Subcommand implementations.
//!
//! Every command writes its output to a caller-supplied writer so it can be
//! exercised against an in-memory cart in tests.

pub mod cart;
pub mod checkout;
pub mod menu;
