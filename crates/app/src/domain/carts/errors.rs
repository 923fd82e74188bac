//! Carts service errors.

use thiserror::Error;

use crate::domain::carts::models::LineItemId;

/// Errors raised by cart operations.
///
/// Pricing and store mutation are total over validated input, so the only
/// failure class is an id-addressed operation targeting an entry that is
/// not in the cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartsServiceError {
    /// The id does not match any line item in the cart.
    #[error("no cart item with id {0}")]
    UnknownItem(LineItemId),
}
