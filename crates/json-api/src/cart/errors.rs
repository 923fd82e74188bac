//! Cart endpoint error mapping.

use salvo::http::StatusError;
use tracing::error;

use haberdash_app::domain::carts::CartsServiceError;

use crate::cart::requests::InvalidConfiguration;

/// Maps domain cart errors onto the wire contract. Operations addressed by
/// an id absent from the cart answer 400, the same class as a validation
/// failure, not 404.
pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::UnknownItem(id) => {
            error!("no cart item with id {id}");

            StatusError::bad_request().brief("unknown cart item id")
        }
    }
}

/// Maps a rejected item configuration to a 400 response. The per-field
/// detail is logged for operators; the response carries the brief only.
pub(crate) fn invalid_configuration(error: InvalidConfiguration) -> StatusError {
    error!("invalid item configuration: {error}");

    StatusError::bad_request().brief(error.to_string())
}
