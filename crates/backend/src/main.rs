pub mod api;
pub mod domain;
pub mod shared;
pub mod system;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::config::StorageBackend;
use shared::data::database::DatabaseStorage;
use shared::data::memory::MemoryStorage;
use shared::data::storage::init_storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Keep application logs, quiet the SQL layer
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;

    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage (demo mode)");
            init_storage(Arc::new(MemoryStorage::new()));
        }
        StorageBackend::Sqlite => {
            let db_path = shared::config::get_database_path(&config)?;
            shared::data::db::initialize_database(&db_path.to_string_lossy())
                .await
                .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;
            init_storage(Arc::new(DatabaseStorage));
        }
    }

    system::initialization::ensure_admin_user_exists().await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let api = Router::new()
        .route("/", get(api::handlers::meta::api_index))
        // ========================================
        // SYSTEM AUTH ROUTES
        // ========================================
        .route("/system/auth/login", post(system::handlers::auth::login))
        .route(
            "/system/auth/register",
            post(system::handlers::auth::register),
        )
        .route("/system/auth/logout", post(system::handlers::auth::logout))
        .route(
            "/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // SPONSOR STORES
        // ========================================
        .route(
            "/sponsor-stores",
            get(api::handlers::a001_sponsor_store::list_all)
                .post(api::handlers::a001_sponsor_store::create),
        )
        .route(
            "/sponsor-stores/:id",
            get(api::handlers::a001_sponsor_store::get_by_id)
                .put(api::handlers::a001_sponsor_store::update),
        )
        // ========================================
        // TOURISM GUIDES
        // ========================================
        .route(
            "/tourism-guides",
            post(api::handlers::a002_tourism_guide::create),
        )
        .route(
            "/tourism-guides/:id",
            get(api::handlers::a002_tourism_guide::get_by_id),
        )
        .route(
            "/tourism-guides/store/:store_id",
            get(api::handlers::a002_tourism_guide::list_by_store),
        )
        // ========================================
        // EXPERIENCE PROGRAMS
        // ========================================
        .route(
            "/experience-programs",
            post(api::handlers::a003_experience_program::create),
        )
        .route(
            "/experience-programs/store/:store_id",
            get(api::handlers::a003_experience_program::list_by_store),
        )
        // ========================================
        // RESERVATIONS
        // ========================================
        .route(
            "/reservations",
            post(api::handlers::a004_reservation::create),
        )
        .route(
            "/reservations/store/:store_id",
            get(api::handlers::a004_reservation::list_by_store),
        )
        .route(
            "/reservations/:id/status",
            put(api::handlers::a004_reservation::update_status),
        )
        // ========================================
        // REVIEWS
        // ========================================
        .route("/reviews", post(api::handlers::a005_review::create))
        .route(
            "/reviews/store/:store_id",
            get(api::handlers::a005_review::list_by_store),
        )
        .fallback(api::handlers::meta::api_not_found);

    // Non-API paths serve the SPA bundle; unknown paths fall back to the
    // main document
    let spa = ServeDir::new("dist").not_found_service(ServeFile::new("dist/index.html"));

    let app = Router::new()
        .route("/health", get(api::handlers::meta::health))
        .nest("/api", api)
        .fallback_service(spa)
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

/// Request logging middleware: one line per request with timing and status.
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status().as_u16();
    if status < 400 {
        tracing::info!("{:>5}ms | {} {:>6} {}", duration.as_millis(), status, method, path);
    } else {
        tracing::warn!("{:>5}ms | {} {:>6} {}", duration.as_millis(), status, method, path);
    }

    response
}
