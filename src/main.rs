//! VMS Server — Visitor Management Service
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use vms_core::config::AppConfig;
use vms_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("VMS_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting VMS v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = vms_database::connection::DatabasePool::connect(&config.database).await?;
    vms_database::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Initialize stores ────────────────────────────────
    let principal_store: Arc<dyn vms_database::stores::PrincipalStore> = Arc::new(
        vms_database::stores::PgPrincipalStore::new(db.pool().clone()),
    );
    let appointment_store: Arc<dyn vms_database::stores::AppointmentStore> = Arc::new(
        vms_database::stores::PgAppointmentStore::new(db.pool().clone()),
    );

    // ── Step 3: Initialize auth system ───────────────────────────
    let password_hasher = Arc::new(vms_auth::password::hasher::PasswordHasher::new());
    let jwt_encoder = Arc::new(vms_auth::jwt::encoder::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(vms_auth::jwt::decoder::JwtDecoder::new(&config.auth));

    // ── Step 4: Initialize services ──────────────────────────────
    let auth_service = Arc::new(vms_service::auth::service::AuthService::new(
        Arc::clone(&principal_store),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
    ));
    let appointment_service = Arc::new(
        vms_service::appointment::service::AppointmentService::new(Arc::clone(&appointment_store)),
    );

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = vms_api::state::AppState::new(
        Arc::new(config.clone()),
        jwt_decoder,
        auth_service,
        appointment_service,
    );

    let app = vms_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("VMS server listening on {addr}");

    // ── Step 6: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("VMS server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
