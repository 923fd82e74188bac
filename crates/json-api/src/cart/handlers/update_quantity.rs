//! Update Quantity Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;

use crate::{
    cart::{
        errors::{into_status_error, invalid_configuration},
        requests::{UpdateQuantityRequest, parse_item_id},
    },
    extensions::*,
    state::State,
};

/// Update Quantity Handler
///
/// Overwrites the quantity of the addressed line item. Deletion is not a
/// quantity update; items leave the cart through the remove endpoint.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid configuration or unknown id"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateQuantityRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let qty = json
        .into_inner()
        .validated_qty()
        .map_err(invalid_configuration)?;

    let id = parse_item_id(&id.into_inner()).map_err(invalid_configuration)?;

    state
        .app
        .carts
        .set_quantity(id, qty)
        .await
        .map_err(into_status_error)?;

    info!(%id, qty, "updated cart item quantity");

    Ok(StatusCode::OK)
}
