// src/bin/api_server.rs

use anyhow::Context;
use clap::Parser;
use product_catalog_api::infra::config::{self, DbConfig};
use product_catalog_api::infra::logging;
use product_catalog_api::{seed_products, transport, ProductService};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Product catalog HTTP API
#[derive(Parser, Debug)]
#[command(name = "api_server", version, about, long_about = None)]
struct Cli {
    /// Insert random products before starting the server
    #[arg(long)]
    seed: bool,

    /// Number of random products to insert with --seed
    #[arg(long, default_value_t = 0)]
    count: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !logging::init() {
        tracing::info!("no .env file found, using process environment only");
    }

    // --- Service Initialization ---
    let db_config = DbConfig::from_env()?;
    let product_service = ProductService::connect(&db_config).await?;

    if cli.seed {
        let inserted = seed_products(&product_service, cli.count)
            .await
            .context("seeding failed")?;
        tracing::info!(inserted, "seeding complete");
    }

    // --- API Server Initialization ---
    let app_state = transport::http::AppState::new(product_service);
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config::LISTEN_ADDR)
        .await
        .with_context(|| format!("failed to bind {}", config::LISTEN_ADDR))?;
    tracing::info!(addr = config::LISTEN_ADDR, "API server listening");
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
