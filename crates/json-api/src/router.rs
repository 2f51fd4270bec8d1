//! App Router

use salvo::Router;

use crate::{auth, display, healthcheck, status, waitlist};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("status").get(status::handler))
        .push(
            Router::with_path("auth")
                .push(Router::with_path("login").post(auth::login::handler))
                .push(Router::with_path("logout").post(auth::logout::handler)),
        )
        .push(Router::with_path("waitlist").post(waitlist::create::handler))
        .push(Router::with_path("api/waitlist").get(waitlist::snapshot::handler))
        .push(Router::with_path("display").get(display::get::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::require_admin)
                .push(
                    Router::with_path("waitlist")
                        .get(waitlist::index::handler)
                        .push(Router::with_path("{id}/assign").post(waitlist::assign::handler))
                        .push(Router::with_path("{id}/seated").post(waitlist::seat::handler))
                        .push(Router::with_path("{id}/delete").post(waitlist::delete::handler)),
                )
                .push(
                    Router::with_path("display")
                        .push(Router::with_path("start").post(display::start::handler))
                        .push(Router::with_path("stop").post(display::stop::handler)),
                ),
        )
}
