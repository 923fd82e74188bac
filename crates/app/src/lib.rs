//! Haberdash application core.
//!
//! Domain logic for the apparel shopping cart: the garment catalog and its
//! pricing rules, the in-memory cart store, and the carts service the HTTP
//! layer talks to.

pub mod context;
pub mod domain;
