use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use crate::api::{handlers, middleware::request_context};
use crate::store::traits::CatalogStore;

pub fn create_router<S: CatalogStore + 'static>() -> Router<Arc<S>> {
    let api = Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Catalog (read-only)
        .route("/guitars", get(handlers::list_guitars::<S>))
        .route("/guitars/:slug", get(handlers::get_guitar::<S>));

    Router::new()
        .nest("/api/v1", api)
        .layer(middleware::from_fn(request_context))
}
