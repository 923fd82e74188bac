//! Empty Cart Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{extensions::*, state::State};

/// Empty Cart Handler
///
/// Clears the cart unconditionally; emptying an already empty cart
/// succeeds.
#[endpoint(
    tags("cart"),
    summary = "Empty Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart emptied"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state.app.carts.clear().await;

    info!("emptied the cart");

    Ok(StatusCode::OK)
}
