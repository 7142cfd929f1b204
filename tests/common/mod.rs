use pet_server::repositories::{self, PoolType};
use pet_server::{AppState, PetServiceClient};
use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::{Channel, Server};

/// In-memory store with the schema applied
///
/// # Returns
/// Single-connection pool, a second connection would open another database
pub async fn create_test_pool() -> PoolType {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory sqlite");
    repositories::ensure_schema(&pool)
        .await
        .expect("Failed to create schema");
    pool
}

/// Serves the application on an ephemeral port
///
/// # Arguments
/// * `state` - AppState to serve
///
/// # Returns
/// Client connected to the running server
pub async fn create_test_client(state: AppState) -> PetServiceClient<Channel> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener address");

    let service = pet_server::create_grpc_server(state);
    tokio::spawn(async move {
        Server::builder()
            .add_service(service)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .expect("test server failed");
    });

    PetServiceClient::connect(format!("http://{}", addr))
        .await
        .expect("Failed to connect test client")
}

/// Number of rows in the pets table
pub async fn count_pets(pool: &PoolType) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pets")
        .fetch_one(pool)
        .await
        .expect("count query");
    count
}
