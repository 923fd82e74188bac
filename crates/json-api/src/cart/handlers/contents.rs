//! Cart Contents Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    cart::responses::{CartContentsResponse, CartItemResponse},
    extensions::*,
    state::State,
};

/// Cart Contents Handler
///
/// Lists the cart entries in insertion order.
#[endpoint(
    tags("cart"),
    summary = "Get Cart Contents",
    responses(
        (status_code = StatusCode::OK, description = "Cart contents"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartContentsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state.app.carts.contents().await;

    Ok(Json(CartContentsResponse {
        cart_items: items.iter().map(CartItemResponse::from).collect(),
    }))
}
