//! Catalog Models

use crate::domain::catalog::pricing;

/// The form of an item (t-shirt vs sweater).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemForm {
    /// A t-shirt.
    TShirt,
    /// A sweater.
    Sweater,
}

/// The fabric weight classes a garment can be made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// Light cotton.
    CottonLight,
    /// Heavy cotton.
    CottonHeavy,
}

/// All fabric colors available for ordering.
///
/// Which subset is valid depends on the form: t-shirts come in black, white,
/// green and red; sweaters in black, white, pink and yellow. The request
/// layer enforces the subsets, the domain accepts any member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FabricColor {
    /// Black.
    Black,
    /// White.
    White,
    /// Green.
    Green,
    /// Red.
    Red,
    /// Pink.
    Pink,
    /// Yellow.
    Yellow,
}

/// Custom text printed on a t-shirt, and the color it is printed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Personalization {
    /// The printed text. Length bounds (1-8) are enforced upstream.
    pub text: String,

    /// The print color.
    pub color: FabricColor,
}

/// A fully configured garment as orderable from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Garment {
    /// A t-shirt, optionally personalized with printed text.
    TShirt {
        /// Fabric weight class.
        material: Material,

        /// Fabric color.
        color: FabricColor,

        /// Optional printed text.
        personalization: Option<Personalization>,
    },

    /// A sweater. Sweaters are only stocked in heavy cotton.
    Sweater {
        /// Fabric color.
        color: FabricColor,
    },
}

impl Garment {
    /// The form of this garment.
    #[must_use]
    pub fn form(&self) -> ItemForm {
        match self {
            Garment::TShirt { .. } => ItemForm::TShirt,
            Garment::Sweater { .. } => ItemForm::Sweater,
        }
    }

    /// The fabric this garment is made of.
    #[must_use]
    pub fn material(&self) -> Material {
        match self {
            Garment::TShirt { material, .. } => *material,
            Garment::Sweater { .. } => Material::CottonHeavy,
        }
    }

    /// The fabric color of this garment.
    #[must_use]
    pub fn color(&self) -> FabricColor {
        match self {
            Garment::TShirt { color, .. } | Garment::Sweater { color } => *color,
        }
    }

    /// The printed text on this garment, if any.
    #[must_use]
    pub fn personalization(&self) -> Option<&Personalization> {
        match self {
            Garment::TShirt {
                personalization, ..
            } => personalization.as_ref(),
            Garment::Sweater { .. } => None,
        }
    }

    /// Whether this garment carries printed text.
    ///
    /// Personalized garments are non-fungible: they never merge with other
    /// cart entries, even ones sharing their model identity.
    #[must_use]
    pub fn is_personalized(&self) -> bool {
        self.personalization().is_some()
    }

    /// The (form, material, color) triple deciding whether two additions of
    /// this garment merge into one line item.
    #[must_use]
    pub fn model_identity(&self) -> ModelIdentity {
        ModelIdentity {
            form: self.form(),
            material: self.material(),
            color: self.color(),
        }
    }

    /// The catalog price of a single unit of this garment.
    #[must_use]
    pub fn unit_price(&self) -> u64 {
        match self {
            Garment::TShirt {
                material,
                color,
                personalization,
            } => pricing::tshirt_unit_price(*material, *color, personalization.as_ref()),
            Garment::Sweater { color } => pricing::sweater_unit_price(*color),
        }
    }
}

/// The composite key used to deduplicate cart additions.
///
/// Equality and hashing are derived field-wise over the three attributes, so
/// two garments share an identity exactly when their form, material and
/// color all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelIdentity {
    /// The item form.
    pub form: ItemForm,

    /// The fabric weight class.
    pub material: Material,

    /// The fabric color.
    pub color: FabricColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_tshirt(color: FabricColor) -> Garment {
        Garment::TShirt {
            material: Material::CottonLight,
            color,
            personalization: None,
        }
    }

    #[test]
    fn sweater_material_is_always_heavy_cotton() {
        let sweater = Garment::Sweater {
            color: FabricColor::Pink,
        };

        assert_eq!(sweater.material(), Material::CottonHeavy);
    }

    #[test]
    fn same_attributes_share_a_model_identity() {
        let a = plain_tshirt(FabricColor::Red);
        let b = plain_tshirt(FabricColor::Red);

        assert_eq!(a.model_identity(), b.model_identity());
    }

    #[test]
    fn personalization_does_not_change_the_model_identity() {
        let plain = plain_tshirt(FabricColor::Black);
        let printed = Garment::TShirt {
            material: Material::CottonLight,
            color: FabricColor::Black,
            personalization: Some(Personalization {
                text: "hi".to_string(),
                color: FabricColor::White,
            }),
        };

        assert_eq!(plain.model_identity(), printed.model_identity());
        assert!(printed.is_personalized());
        assert!(!plain.is_personalized());
    }

    #[test]
    fn different_forms_never_share_an_identity() {
        let tshirt = plain_tshirt(FabricColor::Black);
        let sweater = Garment::Sweater {
            color: FabricColor::Black,
        };

        assert_ne!(tshirt.model_identity(), sweater.model_identity());
    }
}
