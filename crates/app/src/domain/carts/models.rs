//! Cart Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use uuid::Uuid;

use crate::domain::catalog::models::Garment;

/// Line item identifier.
///
/// Opaque, assigned at creation, stable for the item's lifetime. Quantity
/// updates and removals address entries by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineItemId(Uuid);

impl LineItemId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Unwraps to the underlying UUID.
    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for LineItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for LineItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for LineItemId {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

impl From<LineItemId> for Uuid {
    fn from(value: LineItemId) -> Self {
        value.into_uuid()
    }
}

/// One priced entry in the cart: a configured garment and its quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Identifier for quantity updates and removal.
    pub id: LineItemId,

    /// The configured garment.
    pub garment: Garment,

    /// How many units, always at least one.
    pub quantity: u32,

    /// Price per unit in minor units, captured at insertion. Later rule
    /// changes never reprice an existing entry.
    pub unit_price: u64,
}

impl LineItem {
    /// Total cost of this entry in minor units.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }
}

/// Outcome of adding a garment to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddedLineItem {
    /// The affected line item: a fresh entry, or the existing entry the
    /// addition merged into.
    pub id: LineItemId,

    /// Price per unit charged for this addition, in minor units.
    pub unit_price: u64,

    /// `unit_price` times the quantity added by this request, in minor
    /// units.
    pub line_total: u64,
}
