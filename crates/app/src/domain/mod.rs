//! Domain modules.

pub mod carts;
pub mod catalog;
