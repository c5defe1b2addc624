use crate::cli::Args;
use crate::{health, http::cors, points};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

pub fn new(args: &Args) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));

    Router::new()
        .route("/points", post(points::handlers::summarize))
        .nest("/health", health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
                .layer(cors_policy)
                .layer(DefaultBodyLimit::max(args.max_body_bytes)),
        )
}
