//! Employee API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post, routing::put};

use crate::auth::{EMPLOYEE_WRITE, require_permission};
use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/employee/", routes())
}

fn routes() -> Router<ServerState> {
    // Read routes: public (list and detail need no authentication)
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}/", get(handler::get_by_id));

    // Write routes: employee:write required
    let write_routes = Router::new()
        .route("/", post(handler::create))
        .route(
            "/{id}/",
            put(handler::update)
                .patch(handler::update_partial)
                .delete(handler::delete),
        )
        .layer(middleware::from_fn(require_permission(EMPLOYEE_WRITE)));

    read_routes.merge(write_routes)
}
