use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use planets_api::config::ServerConfig;
use planets_api::manager::PlanetManager;
use planets_api::router::build_app_router;
use planets_api::state::AppState;
use planets_db::repositories::PlanetRepo;
use planets_db::store::PgPlanetStore;
use planets_swapi::api::SwapiClient;
use planets_swapi::enrichment::{AppearanceSource, FixedAppearances};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "planets_api=debug,planets_db=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = planets_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    planets_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    planets_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    let repo = PlanetRepo::with_timeout(
        Arc::new(PgPlanetStore::new(pool)),
        Duration::from_secs(config.store_timeout_secs),
    );

    // --- Enrichment ---
    let appearances: Arc<dyn AppearanceSource> = match SwapiClient::new(
        config.swapi_base_url.clone(),
        Duration::from_secs(config.swapi_timeout_secs),
    ) {
        Ok(client) => {
            tracing::info!(base_url = client.base_url(), "SWAPI client ready");
            Arc::new(client)
        }
        Err(e) => {
            tracing::warn!(error = %e, "SWAPI client unavailable, new planets get 0 appearances");
            Arc::new(FixedAppearances(0))
        }
    };

    // --- App state ---
    let state = AppState {
        planets: Arc::new(PlanetManager::new(repo, appearances)),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
