//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use haberdash_app::{context::AppContext, domain::carts::MockCartsService};

use crate::state::State;

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        carts: Arc::new(carts),
    }))
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .push(route),
    )
}
