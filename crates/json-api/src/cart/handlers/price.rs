//! Cart Price Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    cart::responses::{CartPriceResponse, to_major_units},
    extensions::*,
    state::State,
};

/// Cart Price Handler
///
/// Totals the cart. An empty cart prices at zero.
#[endpoint(
    tags("cart"),
    summary = "Get Cart Price",
    responses(
        (status_code = StatusCode::OK, description = "Total cart price"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartPriceResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let total = state.app.carts.total_price().await;

    Ok(Json(CartPriceResponse {
        cart_cost: to_major_units(total),
    }))
}
