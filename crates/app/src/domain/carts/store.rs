//! Cart Store

use rustc_hash::FxHashMap;

use crate::domain::{
    carts::models::{LineItem, LineItemId},
    catalog::models::{Garment, ModelIdentity},
};

/// In-memory cart contents, held in insertion order.
///
/// Invariants:
/// - at most one non-personalized entry exists per model identity;
/// - every personalized entry is its own line item, never merged;
/// - the merge index maps exactly the non-personalized entries;
/// - every entry's quantity is at least one (bounds are enforced by the
///   request layer before a mutation reaches the store).
#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<LineItem>,
    merge_index: FxHashMap<ModelIdentity, LineItemId>,
}

impl CartStore {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a garment to the cart.
    ///
    /// A non-personalized garment whose model identity already has a
    /// non-personalized entry merges into it: the quantities sum and the
    /// existing entry keeps its first-insertion unit price. Anything else
    /// appends a new entry under a fresh id. Returns the id of the affected
    /// entry.
    pub fn add(&mut self, garment: Garment, quantity: u32, unit_price: u64) -> LineItemId {
        if let Some(id) = self.merge_target(&garment) {
            if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                item.quantity += quantity;
                return id;
            }
        }

        let id = LineItemId::new();

        if !garment.is_personalized() {
            self.merge_index.insert(garment.model_identity(), id);
        }

        self.items.push(LineItem {
            id,
            garment,
            quantity,
            unit_price,
        });

        id
    }

    /// Removes the entry with the given id.
    ///
    /// Returns whether an entry was found. The cart is untouched when the id
    /// is unknown.
    pub fn remove(&mut self, id: LineItemId) -> bool {
        let Some(position) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };

        let removed = self.items.remove(position);

        if !removed.garment.is_personalized() {
            self.merge_index.remove(&removed.garment.model_identity());
        }

        true
    }

    /// Overwrites the quantity of the entry with the given id.
    ///
    /// Returns whether an entry was found. Never deletes the entry; removal
    /// is the only deletion path in the id-addressed contract.
    pub fn set_quantity(&mut self, id: LineItemId, quantity: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        self.merge_index.clear();
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of `unit_price * quantity` over all entries, in minor units.
    /// An empty cart prices at zero.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// The number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn merge_target(&self, garment: &Garment) -> Option<LineItemId> {
        if garment.is_personalized() {
            return None;
        }

        self.merge_index.get(&garment.model_identity()).copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::catalog::models::{FabricColor, Material, Personalization};

    use super::*;

    fn red_tshirt() -> Garment {
        Garment::TShirt {
            material: Material::CottonLight,
            color: FabricColor::Red,
            personalization: None,
        }
    }

    fn printed_red_tshirt(text: &str) -> Garment {
        Garment::TShirt {
            material: Material::CottonLight,
            color: FabricColor::Red,
            personalization: Some(Personalization {
                text: text.to_string(),
                color: FabricColor::Black,
            }),
        }
    }

    fn pink_sweater() -> Garment {
        Garment::Sweater {
            color: FabricColor::Pink,
        }
    }

    #[test]
    fn add_appends_a_new_entry() {
        let mut cart = CartStore::new();

        let id = cart.add(red_tshirt(), 2, 18_95);

        assert_eq!(cart.len(), 1);

        let item = cart.items().first().unwrap();

        assert_eq!(item.id, id);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price, 18_95);
    }

    #[test]
    fn same_identity_merges_and_sums_quantity() {
        let mut cart = CartStore::new();

        let first = cart.add(red_tshirt(), 2, 18_95);
        let second = cart.add(red_tshirt(), 3, 18_95);

        assert_eq!(first, second);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items().first().unwrap().quantity, 5);
    }

    #[test]
    fn merged_entry_keeps_the_first_insertion_price() {
        let mut cart = CartStore::new();

        cart.add(red_tshirt(), 1, 18_95);
        // a later rule change would produce a different price; the entry
        // must keep the price it was first inserted at
        cart.add(red_tshirt(), 1, 99_99);

        assert_eq!(cart.items().first().unwrap().unit_price, 18_95);
    }

    #[test]
    fn personalized_items_never_merge() {
        let mut cart = CartStore::new();

        let plain = cart.add(red_tshirt(), 1, 18_95);
        let printed_a = cart.add(printed_red_tshirt("crab"), 1, 18_95);
        let printed_b = cart.add(printed_red_tshirt("crab"), 1, 18_95);

        assert_eq!(cart.len(), 3);
        assert_ne!(plain, printed_a);
        assert_ne!(printed_a, printed_b);
    }

    #[test]
    fn different_forms_stay_distinct() {
        let mut cart = CartStore::new();

        cart.add(red_tshirt(), 1, 18_95);
        cart.add(pink_sweater(), 1, 32_95);

        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn remove_unknown_id_leaves_the_cart_unchanged() {
        let mut cart = CartStore::new();

        cart.add(red_tshirt(), 2, 18_95);

        assert!(!cart.remove(LineItemId::new()));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn remove_deletes_exactly_the_addressed_entry() {
        let mut cart = CartStore::new();

        let tshirt = cart.add(red_tshirt(), 2, 18_95);
        let sweater = cart.add(pink_sweater(), 1, 32_95);

        assert!(cart.remove(tshirt));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items().first().unwrap().id, sweater);
    }

    #[test]
    fn removed_identity_can_be_added_again_as_a_fresh_entry() {
        let mut cart = CartStore::new();

        let first = cart.add(red_tshirt(), 2, 18_95);

        assert!(cart.remove(first));

        let second = cart.add(red_tshirt(), 1, 18_95);

        assert_ne!(first, second);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items().first().unwrap().quantity, 1);
    }

    #[test]
    fn removing_a_personalized_entry_keeps_the_plain_one_mergeable() {
        let mut cart = CartStore::new();

        let plain = cart.add(red_tshirt(), 1, 18_95);
        let printed = cart.add(printed_red_tshirt("crab"), 1, 18_95);

        assert!(cart.remove(printed));

        let merged = cart.add(red_tshirt(), 1, 18_95);

        assert_eq!(merged, plain);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items().first().unwrap().quantity, 2);
    }

    #[test]
    fn set_quantity_overwrites_without_deleting() {
        let mut cart = CartStore::new();

        let id = cart.add(red_tshirt(), 2, 18_95);

        assert!(cart.set_quantity(id, 7));
        assert_eq!(cart.items().first().unwrap().quantity, 7);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn set_quantity_unknown_id_reports_not_found() {
        let mut cart = CartStore::new();

        assert!(!cart.set_quantity(LineItemId::new(), 5));
    }

    #[test]
    fn empty_cart_prices_at_zero() {
        let cart = CartStore::new();

        assert_eq!(cart.total_price(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn total_price_sums_unit_price_times_quantity() {
        let mut cart = CartStore::new();

        cart.add(red_tshirt(), 2, 18_95);
        cart.add(pink_sweater(), 3, 32_95);

        assert_eq!(cart.total_price(), 2 * 18_95 + 3 * 32_95);
    }

    #[test]
    fn items_are_listed_in_insertion_order() {
        let mut cart = CartStore::new();

        let first = cart.add(pink_sweater(), 1, 32_95);
        let second = cart.add(red_tshirt(), 1, 18_95);
        let third = cart.add(printed_red_tshirt("crab"), 1, 18_95);

        let ids: Vec<_> = cart.items().iter().map(|item| item.id).collect();

        assert_eq!(ids, vec![first, second, third]);
    }

    #[test]
    fn clear_empties_regardless_of_prior_state() {
        let mut cart = CartStore::new();

        cart.add(red_tshirt(), 2, 18_95);
        cart.add(printed_red_tshirt("crab"), 1, 18_95);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), 0);

        // the merge index must be empty too: a fresh add starts over
        let id = cart.add(red_tshirt(), 1, 18_95);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items().first().unwrap().id, id);
    }
}
