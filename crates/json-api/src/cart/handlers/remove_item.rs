//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use crate::{
    cart::{
        errors::{into_status_error, invalid_configuration},
        requests::parse_item_id,
    },
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
///
/// Deletes the addressed line item from the cart.
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown or malformed id"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let id = parse_item_id(&id.into_inner()).map_err(invalid_configuration)?;

    state
        .app
        .carts
        .remove_item(id)
        .await
        .map_err(into_status_error)?;

    info!(%id, "removed cart item");

    Ok(StatusCode::OK)
}
