//! Cart Responses
//!
//! Wire shapes returned by the cart endpoints. Prices travel in major units
//! (e.g. `43.9`); the domain keeps them in cents.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use haberdash_app::domain::{carts::models::LineItem, catalog::models::{FabricColor, ItemForm}};

use crate::cart::requests::MaterialField;

/// Converts a price in minor units to the major-unit form used on the wire.
pub(crate) fn to_major_units(cents: u64) -> f64 {
    #[expect(clippy::cast_precision_loss, reason = "cart totals are far below 2^53")]
    let major = cents as f64 / 100.0;

    major
}

/// Cart Item Costs Response
///
/// Total cost of the items added by a single add request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemCostsResponse {
    /// Unit cost times the quantity just added, in major units
    #[serde(rename = "cartItemCosts")]
    pub cart_item_costs: f64,
}

/// Cart Price Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartPriceResponse {
    /// Total price of the whole cart, in major units
    #[serde(rename = "cartCost")]
    pub cart_cost: f64,
}

/// Cart Contents Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartContentsResponse {
    /// Line items in insertion order
    #[serde(rename = "cartItems")]
    pub cart_items: Vec<CartItemResponse>,
}

/// Item forms on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) enum FormField {
    #[serde(rename = "TSHIRT")]
    TShirt,
    #[serde(rename = "SWEATER")]
    Sweater,
}

impl From<ItemForm> for FormField {
    fn from(value: ItemForm) -> Self {
        match value {
            ItemForm::TShirt => FormField::TShirt,
            ItemForm::Sweater => FormField::Sweater,
        }
    }
}

/// The full fabric color set on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum ColorField {
    Black,
    White,
    Green,
    Red,
    Pink,
    Yellow,
}

impl From<FabricColor> for ColorField {
    fn from(value: FabricColor) -> Self {
        match value {
            FabricColor::Black => ColorField::Black,
            FabricColor::White => ColorField::White,
            FabricColor::Green => ColorField::Green,
            FabricColor::Red => ColorField::Red,
            FabricColor::Pink => ColorField::Pink,
            FabricColor::Yellow => ColorField::Yellow,
        }
    }
}

/// One cart entry as listed by `GET /api/cart`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    /// Line item id, used for quantity updates and removal
    pub id: Uuid,

    /// Item form
    pub form: FormField,

    /// Fabric weight class; sweaters always report heavy cotton
    pub material: MaterialField,

    /// Fabric color
    pub color: ColorField,

    /// Printed text, when personalized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Print color, present exactly when `text` is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<ColorField>,

    /// Number of units
    pub qty: u32,

    /// Price per unit captured at insertion, in major units
    pub unit_cost: f64,
}

impl From<&LineItem> for CartItemResponse {
    fn from(item: &LineItem) -> Self {
        let print = item.garment.personalization();

        CartItemResponse {
            id: item.id.into_uuid(),
            form: item.garment.form().into(),
            material: item.garment.material().into(),
            color: item.garment.color().into(),
            text: print.map(|p| p.text.clone()),
            text_color: print.map(|p| p.color.into()),
            qty: item.quantity,
            unit_cost: to_major_units(item.unit_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use haberdash_app::domain::{
        carts::models::LineItemId,
        catalog::models::{Garment, Material, Personalization},
    };
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn minor_units_render_as_major_units() {
        assert!((to_major_units(43_90) - 43.9).abs() < f64::EPSILON);
        assert!((to_major_units(0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sweater_entries_report_heavy_cotton() -> TestResult {
        let item = LineItem {
            id: LineItemId::new(),
            garment: Garment::Sweater {
                color: FabricColor::Pink,
            },
            quantity: 1,
            unit_price: 32_95,
        };

        let response = CartItemResponse::from(&item);
        let value = serde_json::to_value(&response)?;

        assert_eq!(value.get("form"), Some(&json!("SWEATER")));
        assert_eq!(value.get("material"), Some(&json!("COTTON_HEAVY")));
        assert_eq!(value.get("color"), Some(&json!("PINK")));
        assert_eq!(value.get("unitCost"), Some(&json!(32.95)));
        assert!(
            value.get("text").is_none(),
            "plain items must omit text fields"
        );

        Ok(())
    }

    #[test]
    fn personalized_entries_carry_text_and_its_color() -> TestResult {
        let item = LineItem {
            id: LineItemId::new(),
            garment: Garment::TShirt {
                material: Material::CottonLight,
                color: FabricColor::Black,
                personalization: Some(Personalization {
                    text: "ferris".to_string(),
                    color: FabricColor::Green,
                }),
            },
            quantity: 2,
            unit_price: 19_95,
        };

        let value = serde_json::to_value(CartItemResponse::from(&item))?;

        assert_eq!(value.get("form"), Some(&json!("TSHIRT")));
        assert_eq!(value.get("text"), Some(&json!("ferris")));
        assert_eq!(value.get("textColor"), Some(&json!("GREEN")));
        assert_eq!(value.get("qty"), Some(&json!(2)));

        Ok(())
    }
}
