//! Pricing Rules
//!
//! A small additive rule table, all amounts in minor units (cents). The
//! functions here are pure and total over valid input; invalid combinations
//! are rejected upstream by request validation, never here. This module is
//! the seam where a real catalog service would slot in.

use crate::domain::catalog::models::{FabricColor, Material, Personalization};

/// Base price of a t-shirt in black or white.
pub const TSHIRT_BASE: u64 = 16_95;

/// Extra cost for a heavy cotton t-shirt.
pub const HEAVY_COTTON_SURCHARGE: u64 = 3_00;

/// Extra cost for a t-shirt in one of the fancy colors (green or red).
pub const TSHIRT_FANCY_COLOR_SURCHARGE: u64 = 2_00;

/// Extra cost for printed text in anything but the free colors (black or
/// white).
pub const TEXT_COLOR_SURCHARGE: u64 = 3_00;

/// Base price of a sweater in black or white.
pub const SWEATER_BASE: u64 = 28_95;

/// Extra cost for a sweater in one of the fancy colors (pink or yellow).
pub const SWEATER_FANCY_COLOR_SURCHARGE: u64 = 4_00;

/// Price of a single t-shirt with the given configuration.
#[must_use]
pub fn tshirt_unit_price(
    material: Material,
    color: FabricColor,
    personalization: Option<&Personalization>,
) -> u64 {
    let mut price = TSHIRT_BASE;

    if material == Material::CottonHeavy {
        price += HEAVY_COTTON_SURCHARGE;
    }

    if matches!(color, FabricColor::Green | FabricColor::Red) {
        price += TSHIRT_FANCY_COLOR_SURCHARGE;
    }

    // printed text is free in black or white
    if personalization
        .is_some_and(|print| !matches!(print.color, FabricColor::Black | FabricColor::White))
    {
        price += TEXT_COLOR_SURCHARGE;
    }

    price
}

/// Price of a single sweater in the given color.
#[must_use]
pub fn sweater_unit_price(color: FabricColor) -> u64 {
    let mut price = SWEATER_BASE;

    if matches!(color, FabricColor::Pink | FabricColor::Yellow) {
        price += SWEATER_FANCY_COLOR_SURCHARGE;
    }

    price
}
