//! Catalog
//!
//! The garments that can be ordered and the rules that price them.

pub mod models;
pub mod pricing;

pub use models::*;
