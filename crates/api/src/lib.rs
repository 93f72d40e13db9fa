//! HTTP API server with observability for the cat service.
//!
//! Provides REST endpoints for cat management plus health, liveness and
//! readiness probes, with structured logging (tracing), Prometheus metrics
//! and request IDs.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod shutdown;
pub mod subscribers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use domain::{CatRepository, CatService, DomainEventSubscriber};
use metrics_exporter_prometheus::PrometheusHandle;
use store::{InMemoryCatRepository, InMemoryEventBus};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use routes::cats::AppState;
use shutdown::ShutdownState;
use subscribers::CatEventLogger;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: CatRepository + 'static>(
    state: Arc<AppState<R>>,
    shutdown: Arc<ShutdownState>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let probes_router = Router::new()
        .route("/live", get(routes::health::live))
        .route("/ready", get(routes::health::ready))
        .with_state(shutdown);

    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::scrape))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health::check))
        .route(
            "/cats",
            get(routes::cats::list::<R>).post(routes::cats::create::<R>),
        )
        .route(
            "/cats/{id}",
            get(routes::cats::get::<R>)
                .patch(routes::cats::update::<R>)
                .delete(routes::cats::delete::<R>),
        )
        .with_state(state)
        .merge(probes_router)
        .merge(metrics_router)
        .route_layer(axum::middleware::from_fn(middleware::track_metrics))
        .fallback(routes::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

/// Creates the default application state: an in-memory repository and an
/// event bus with the cat event logger subscribed.
pub fn create_default_state() -> Arc<AppState<InMemoryCatRepository>> {
    create_state(InMemoryCatRepository::new())
}

/// Creates application state over the given repository.
pub fn create_state<R: CatRepository + 'static>(repository: R) -> Arc<AppState<R>> {
    let subscribers: Vec<Arc<dyn DomainEventSubscriber>> = vec![Arc::new(CatEventLogger)];
    let event_bus = Arc::new(InMemoryEventBus::new(subscribers));

    Arc::new(AppState {
        cat_service: CatService::new(Arc::new(repository), event_bus),
    })
}
