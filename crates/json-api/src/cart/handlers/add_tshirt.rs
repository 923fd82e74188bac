//! Add T-Shirt Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    cart::{
        errors::invalid_configuration,
        requests::AddTShirtRequest,
        responses::{CartItemCostsResponse, to_major_units},
    },
    extensions::*,
    state::State,
};

/// Add T-Shirt Handler
///
/// Validates the configuration, prices the t-shirt and adds it to the cart.
#[endpoint(
    tags("cart"),
    summary = "Add T-Shirt to Cart",
    responses(
        (status_code = StatusCode::OK, description = "T-shirt added, body carries the cost of the added items"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid configuration"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddTShirtRequest>,
    depot: &mut Depot,
) -> Result<Json<CartItemCostsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let (garment, qty) = json
        .into_inner()
        .into_order()
        .map_err(invalid_configuration)?;

    let added = state.app.carts.add_garment(garment, qty).await;

    info!(id = %added.id, qty, "added t-shirt to cart");

    Ok(Json(CartItemCostsResponse {
        cart_item_costs: to_major_units(added.line_total),
    }))
}
