//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        models::{AddedLineItem, LineItem, LineItemId},
        store::CartStore,
    },
    catalog::models::Garment,
};

/// The single in-memory cart, shared across requests.
///
/// One cart, one user: all mutations are serialized through a single mutex,
/// and each request runs to completion against the store before the next
/// touches it. The cart lives for the process lifetime; nothing is
/// persisted.
#[derive(Debug, Default)]
pub struct InMemoryCartsService {
    cart: Mutex<CartStore>,
}

impl InMemoryCartsService {
    /// Creates a service over a fresh, empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartsService for InMemoryCartsService {
    async fn add_garment(&self, garment: Garment, quantity: u32) -> AddedLineItem {
        let unit_price = garment.unit_price();
        let line_total = unit_price * u64::from(quantity);

        let mut cart = self.cart.lock().await;

        let id = cart.add(garment, quantity, unit_price);

        debug!(%id, quantity, unit_price, "added garment to cart");

        AddedLineItem {
            id,
            unit_price,
            line_total,
        }
    }

    async fn set_quantity(
        &self,
        id: LineItemId,
        quantity: u32,
    ) -> Result<(), CartsServiceError> {
        let mut cart = self.cart.lock().await;

        if cart.set_quantity(id, quantity) {
            Ok(())
        } else {
            Err(CartsServiceError::UnknownItem(id))
        }
    }

    async fn remove_item(&self, id: LineItemId) -> Result<(), CartsServiceError> {
        let mut cart = self.cart.lock().await;

        if cart.remove(id) {
            Ok(())
        } else {
            Err(CartsServiceError::UnknownItem(id))
        }
    }

    async fn clear(&self) {
        self.cart.lock().await.clear();
    }

    async fn contents(&self) -> Vec<LineItem> {
        self.cart.lock().await.items().to_vec()
    }

    async fn total_price(&self) -> u64 {
        self.cart.lock().await.total_price()
    }
}

/// The cart operations exposed to the HTTP layer.
#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Prices the garment from the catalog rules and adds it to the cart,
    /// merging into an existing non-personalized entry of the same model
    /// identity when there is one. Cannot fail for a validated garment.
    async fn add_garment(&self, garment: Garment, quantity: u32) -> AddedLineItem;

    /// Overwrites the quantity of the addressed line item.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::UnknownItem`] when no entry has the id;
    /// the cart is left untouched.
    async fn set_quantity(&self, id: LineItemId, quantity: u32) -> Result<(), CartsServiceError>;

    /// Removes the addressed line item.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::UnknownItem`] when no entry has the id;
    /// the cart is left untouched.
    async fn remove_item(&self, id: LineItemId) -> Result<(), CartsServiceError>;

    /// Empties the cart unconditionally.
    async fn clear(&self);

    /// A snapshot of the cart contents in insertion order.
    async fn contents(&self) -> Vec<LineItem>;

    /// Total price of the cart in minor units; zero when empty.
    async fn total_price(&self) -> u64;
}
