use std::net::SocketAddr;

use flashcards::config::DatabaseConfig;
use flashcards::database;
use flashcards::logger::Logger;
use flashcards::server::Server;
use flashcards::shell::http;
use flashcards::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let logger = Logger::init()?;
    tracing::info!(profile = ?logger.profile(), "logger installed");

    let db = match database::connect(&DatabaseConfig::new()).await {
        Ok(pool) => {
            tracing::info!("database pool ready");
            Some(pool)
        }
        Err(e) => {
            tracing::error!(error = %e, "database unavailable, serving in degraded mode");
            None
        }
    };

    let state = AppState { db: db.clone() };
    let server = Server::new(http::router(state), logger);

    let addr: SocketAddr = "0.0.0.0:8080".parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, server.engine)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = db {
        pool.close().await;
        tracing::info!("database pool released");
    }
    server.logger.flush();

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install the ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install the sigterm handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
