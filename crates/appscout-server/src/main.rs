use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appscout_catalog::ItunesClient;
use appscout_server::{create_router, AppState, Config};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: PORT (default: 3000)");
            eprintln!("Optional: APPSCOUT_HOST, APPSCOUT_CATALOG_URL, APPSCOUT_STATIC_DIR");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting AppScout server");
    tracing::info!("Listen address: {}", config.listen_addr);
    tracing::info!("Catalog endpoint: {}", config.catalog_url);
    tracing::info!("Static files: {}", config.static_dir.display());

    // Create app state
    let state = AppState::new(ItunesClient::new(config.catalog_url.clone()));

    // Build router
    let app = create_router(state).nest_service("/static", ServeDir::new(&config.static_dir));

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running on port {}", config.listen_addr.port());

    axum::serve(listener, app).await.expect("Server error");
}
