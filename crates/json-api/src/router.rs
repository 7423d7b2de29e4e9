//! App Router

use salvo::Router;

use crate::{appointments, doctors, patients, rooms};

/// Every entity route, mounted under `/api`.
pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("doctor").post(doctors::create::handler))
        .push(
            Router::with_path("doctors")
                .get(doctors::index::handler)
                .delete(doctors::delete_all::handler)
                .push(
                    Router::with_path("{id}")
                        .get(doctors::get::handler)
                        .put(doctors::update::handler)
                        .delete(doctors::delete::handler),
                ),
        )
        .push(Router::with_path("patient").post(patients::create::handler))
        .push(
            Router::with_path("patients")
                .get(patients::index::handler)
                .delete(patients::delete_all::handler)
                .push(
                    Router::with_path("{id}")
                        .get(patients::get::handler)
                        .put(patients::update::handler)
                        .delete(patients::delete::handler),
                ),
        )
        .push(Router::with_path("room").post(rooms::create::handler))
        .push(
            Router::with_path("rooms")
                .get(rooms::index::handler)
                .delete(rooms::delete_all::handler)
                .push(
                    Router::with_path("{room_name}")
                        .get(rooms::get::handler)
                        .delete(rooms::delete::handler),
                ),
        )
        .push(Router::with_path("appointment").post(appointments::create::handler))
        .push(
            Router::with_path("appointments")
                .get(appointments::index::handler)
                .delete(appointments::delete_all::handler)
                .push(
                    Router::with_path("{id}")
                        .get(appointments::get::handler)
                        .delete(appointments::delete::handler),
                ),
        )
}
