mod cors;
mod routes;


use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use switchyard_core::AppError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

pub fn build_router(
    app_state: AppState,
    api_prefix: &str,
    cors_allowed_origin: Option<&str>,
) -> Result<Router, AppError> {
    let protected_routes = resource_router().route_layer(from_fn_with_state(
        app_state.clone(),
        middleware::authenticate,
    ));

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/auth/login", post(handlers::auth::login_handler));

    let router = if api_prefix.is_empty() {
        public_routes.merge(protected_routes)
    } else {
        public_routes.nest(api_prefix, protected_routes)
    };

    let router = router.layer(TraceLayer::new_for_http());
    let router = match cors_allowed_origin {
        Some(origin) => router.layer(cors::build_cors_layer(origin)?),
        None => router,
    };

    Ok(router.with_state(app_state))
}

/// Resource endpoints without the authentication layer.
fn resource_router() -> Router<AppState> {
    routes::route_table()
        .into_iter()
        .fold(Router::new(), |router, route| {
            router.route(route.path, route.handler)
        })
}
