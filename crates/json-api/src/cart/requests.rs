//! Cart Requests
//!
//! Each request shape is a typed serde struct with unknown fields denied and
//! per-shape enums, so required fields, enum membership and disallowed
//! properties are all rejected during deserialization. Range and
//! conditional-presence constraints live in the fallible conversions into
//! domain orders below. No mutation happens until a conversion succeeds.

use std::ops::RangeInclusive;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use haberdash_app::domain::{
    carts::models::LineItemId,
    catalog::models::{FabricColor, Garment, Material, Personalization},
};

/// Valid quantity range for any cart item.
pub(crate) const QTY_RANGE: RangeInclusive<u32> = 1..=99;

/// Valid personalization text length.
pub(crate) const TEXT_LEN_RANGE: RangeInclusive<usize> = 1..=8;

/// Ways an inbound item configuration can fail validation beyond what
/// deserialization already rejects.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum InvalidConfiguration {
    #[error("qty must be between 1 and 99")]
    QtyOutOfRange,

    #[error("text must be between 1 and 8 characters")]
    TextLength,

    #[error("textColor is required when text is present")]
    MissingTextColor,

    #[error("textColor is only allowed alongside text")]
    DanglingTextColor,

    #[error("id must be a 36 character uuid")]
    MalformedId,
}

/// Parses a line item id from its raw path segment.
///
/// Ids are 36 character hyphenated uuids. The uuid parser alone would also
/// accept the simple, braced and urn textual forms, so the segment length is
/// checked first.
pub(crate) fn parse_item_id(raw: &str) -> Result<LineItemId, InvalidConfiguration> {
    if raw.len() != 36 {
        return Err(InvalidConfiguration::MalformedId);
    }

    Uuid::parse_str(raw)
        .map(LineItemId::from_uuid)
        .map_err(|_ignored| InvalidConfiguration::MalformedId)
}

fn validate_qty(qty: u32) -> Result<u32, InvalidConfiguration> {
    if QTY_RANGE.contains(&qty) {
        Ok(qty)
    } else {
        Err(InvalidConfiguration::QtyOutOfRange)
    }
}

/// Fabric weight classes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum MaterialField {
    CottonLight,
    CottonHeavy,
}

impl From<MaterialField> for Material {
    fn from(value: MaterialField) -> Self {
        match value {
            MaterialField::CottonLight => Material::CottonLight,
            MaterialField::CottonHeavy => Material::CottonHeavy,
        }
    }
}

impl From<Material> for MaterialField {
    fn from(value: Material) -> Self {
        match value {
            Material::CottonLight => MaterialField::CottonLight,
            Material::CottonHeavy => MaterialField::CottonHeavy,
        }
    }
}

/// Colors a t-shirt can be ordered in; also the valid print colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum TShirtColor {
    Black,
    White,
    Green,
    Red,
}

impl From<TShirtColor> for FabricColor {
    fn from(value: TShirtColor) -> Self {
        match value {
            TShirtColor::Black => FabricColor::Black,
            TShirtColor::White => FabricColor::White,
            TShirtColor::Green => FabricColor::Green,
            TShirtColor::Red => FabricColor::Red,
        }
    }
}

/// Colors a sweater can be ordered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum SweaterColor {
    Black,
    White,
    Pink,
    Yellow,
}

impl From<SweaterColor> for FabricColor {
    fn from(value: SweaterColor) -> Self {
        match value {
            SweaterColor::Black => FabricColor::Black,
            SweaterColor::White => FabricColor::White,
            SweaterColor::Pink => FabricColor::Pink,
            SweaterColor::Yellow => FabricColor::Yellow,
        }
    }
}

/// Add T-Shirt Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub(crate) struct AddTShirtRequest {
    pub material: MaterialField,
    pub color: TShirtColor,
    pub qty: Option<u32>,
    pub text: Option<String>,
    pub text_color: Option<TShirtColor>,
}

impl AddTShirtRequest {
    /// Validates range and conditional-presence constraints and produces
    /// the configured garment plus quantity.
    pub(crate) fn into_order(self) -> Result<(Garment, u32), InvalidConfiguration> {
        let qty = validate_qty(self.qty.unwrap_or(1))?;

        let personalization = match (self.text, self.text_color) {
            (Some(text), Some(color)) => {
                if !TEXT_LEN_RANGE.contains(&text.chars().count()) {
                    return Err(InvalidConfiguration::TextLength);
                }

                Some(Personalization {
                    text,
                    color: color.into(),
                })
            }
            (Some(_), None) => return Err(InvalidConfiguration::MissingTextColor),
            (None, Some(_)) => return Err(InvalidConfiguration::DanglingTextColor),
            (None, None) => None,
        };

        Ok((
            Garment::TShirt {
                material: self.material.into(),
                color: self.color.into(),
                personalization,
            },
            qty,
        ))
    }
}

/// Add Sweater Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub(crate) struct AddSweaterRequest {
    pub color: SweaterColor,
    pub qty: Option<u32>,
}

impl AddSweaterRequest {
    /// Validates the quantity range and produces the configured garment
    /// plus quantity.
    pub(crate) fn into_order(self) -> Result<(Garment, u32), InvalidConfiguration> {
        let qty = validate_qty(self.qty.unwrap_or(1))?;

        Ok((
            Garment::Sweater {
                color: self.color.into(),
            },
            qty,
        ))
    }
}

/// Update Quantity Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub(crate) struct UpdateQuantityRequest {
    pub qty: u32,
}

impl UpdateQuantityRequest {
    /// Validates the quantity range.
    pub(crate) fn validated_qty(&self) -> Result<u32, InvalidConfiguration> {
        validate_qty(self.qty)
    }
}
