use pet_server::{AppState, Config, create_grpc_server, repositories};
use tonic::transport::Server;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    config.print_info();

    let pool = repositories::connect(&config).await?;
    repositories::ensure_schema(&pool).await?;

    let state = AppState::new(pool.clone());
    let addr = config.socket_addr()?;
    info!("gRPC server listening at {}", addr);

    Server::builder()
        .add_service(create_grpc_server(state))
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        // never resolve, keep serving
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
