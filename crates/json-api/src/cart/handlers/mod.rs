//! Cart Handlers

pub(crate) mod add_sweater;
pub(crate) mod add_tshirt;
pub(crate) mod contents;
pub(crate) mod empty;
pub(crate) mod price;
pub(crate) mod remove_item;
pub(crate) mod update_quantity;
