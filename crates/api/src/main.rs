//! Service entry point.

use std::sync::Arc;

use cart::CartStore;
use clap::Parser;
use inventory::StockStore;
use payment::PaymentGateway;
use saga::{CheckoutSaga, HttpInventoryClient, HttpPaymentClient};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use api::config::{Cli, ServiceKind};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

#[tokio::main]
async fn main() {
    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Install Prometheus metrics recorder
    let prometheus_builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let metrics_handle = prometheus_builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 3. Pick the service for this process
    let cli = Cli::parse();
    let service = cli.service;
    let addr = cli.addr();

    let app = match service {
        ServiceKind::Cart => api::cart_app(CartStore::new(), metrics_handle),
        ServiceKind::Inventory => api::inventory_app(StockStore::new(), metrics_handle),
        ServiceKind::Payment => {
            api::payment_app(PaymentGateway::with_default_processors(), metrics_handle)
        }
        ServiceKind::Orchestrator => {
            tracing::info!(
                inventory_url = %cli.inventory_url,
                payment_url = %cli.payment_url,
                "orchestrator collaborators configured"
            );
            let saga = Arc::new(CheckoutSaga::new(
                HttpInventoryClient::new(cli.inventory_url),
                HttpPaymentClient::new(cli.payment_url),
            ));
            api::checkout_app(saga, metrics_handle)
        }
    };

    // 4. Start server
    tracing::info!(service = service.name(), %addr, "starting service");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}
