//! App Router

use salvo::Router;

use crate::cart;

/// All cart routes, mounted under `/api`.
///
/// The static `quantity` segment is registered before the `{id}` wildcard so
/// quantity updates are never swallowed by the id-addressed delete route.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("cartitem")
                .push(Router::with_path("tshirt").post(cart::add_tshirt::handler))
                .push(Router::with_path("sweater").post(cart::add_sweater::handler))
                .push(
                    Router::with_path("quantity")
                        .push(Router::with_path("{id}").put(cart::update_quantity::handler)),
                )
                .push(Router::with_path("{id}").delete(cart::remove_item::handler)),
        )
        .push(
            Router::with_path("cart")
                .get(cart::contents::handler)
                .delete(cart::empty::handler)
                .push(Router::with_path("price").get(cart::price::handler)),
        )
}
