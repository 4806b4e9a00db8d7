//! HTTP surface for the checkout services.
//!
//! Each service (cart, inventory, payment, orchestrator) gets its own
//! axum router; one process serves exactly one of them. All routers
//! share the same ambient plumbing: `/health` with the service name,
//! `/metrics` with Prometheus output, a JSON 404 fallback, CORS, and
//! request tracing.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use cart::CartStore;
use inventory::StockStore;
use metrics_exporter_prometheus::PrometheusHandle;
use payment::PaymentGateway;
use saga::{CheckoutSaga, InventoryClient, PaymentClient};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

fn base_routes(service: &'static str, metrics_handle: PrometheusHandle) -> Router {
    let health = Router::new()
        .route("/health", get(routes::health::check))
        .with_state(service);
    let metrics = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);
    health.merge(metrics)
}

fn finish(router: Router) -> Router {
    router
        .fallback(routes::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the cart service router.
pub fn cart_app(store: CartStore, metrics_handle: PrometheusHandle) -> Router {
    let api = Router::new()
        .route("/cart/{user}", get(routes::cart::view))
        .route("/cart/{user}/add", post(routes::cart::add))
        .with_state(store);
    finish(base_routes("cart", metrics_handle).merge(api))
}

/// Creates the inventory service router.
pub fn inventory_app(store: StockStore, metrics_handle: PrometheusHandle) -> Router {
    let api = Router::new()
        .route("/inventory/{item}", get(routes::inventory::get))
        .route("/inventory/{item}", put(routes::inventory::set))
        .route("/inventory/{item}/reserve", post(routes::inventory::reserve))
        .route("/inventory/{item}/release", post(routes::inventory::release))
        .with_state(store);
    finish(base_routes("inventory", metrics_handle).merge(api))
}

/// Creates the payment service router.
pub fn payment_app(gateway: PaymentGateway, metrics_handle: PrometheusHandle) -> Router {
    let api = Router::new()
        .route("/pay", post(routes::payment::pay))
        .with_state(gateway);
    finish(base_routes("payment", metrics_handle).merge(api))
}

/// Creates the orchestrator router over any pair of collaborator
/// clients.
pub fn checkout_app<I, P>(
    saga: Arc<CheckoutSaga<I, P>>,
    metrics_handle: PrometheusHandle,
) -> Router
where
    I: InventoryClient + 'static,
    P: PaymentClient + 'static,
{
    let api = Router::new()
        .route("/checkout", post(routes::checkout::checkout::<I, P>))
        .with_state(saga);
    finish(base_routes("orchestrator", metrics_handle).merge(api))
}
