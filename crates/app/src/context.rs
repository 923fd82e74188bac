//! App Context

use std::sync::Arc;

use crate::domain::carts::{CartsService, InMemoryCartsService};

/// Shared application services handed to request handlers.
///
/// Handlers receive the context through server state rather than reaching
/// for a process-wide singleton, so the core stays testable and a future
/// multi-cart extension only needs a different construction site.
#[derive(Clone)]
pub struct AppContext {
    /// The carts service.
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    /// Builds a context backed by a fresh, empty in-memory cart.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            carts: Arc::new(InMemoryCartsService::new()),
        }
    }
}
