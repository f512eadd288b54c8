//! Todo Server binary.

use std::net::SocketAddr;

use todo_server::{config::Config, create_app, init_tracing, state::create_shared_state};
use todo_store::{
    Backend, MemoryTodoStore, MySqlTodoStore, PostgresTodoStore, SqliteTodoStore, TodoStore,
    initialize_with_retry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level);

    // Select the storage backend from the normalized connection string
    let backend = Backend::from_database_url(config.database_url.as_deref())?;

    tracing::info!(backend = backend.name(), "Starting Todo Server");

    match backend {
        Backend::Memory => run(config, MemoryTodoStore::new()).await,
        Backend::Postgres(url) => run(config, PostgresTodoStore::connect_lazy(&url)?).await,
        Backend::MySql(url) => run(config, MySqlTodoStore::connect_lazy(&url)?).await,
        Backend::Sqlite(url) => run(config, SqliteTodoStore::connect_lazy(&url)?).await,
    }
}

/// Initializes storage and serves requests until shutdown.
async fn run<S: TodoStore + 'static>(config: Config, store: S) -> anyhow::Result<()> {
    // Failure here is non-fatal: the port still binds and the health
    // endpoint surfaces the outage per-request.
    if let Err(err) = initialize_with_retry(&store, &config.retry_policy()).await {
        tracing::error!(error = %err, "Storage never became ready; serving anyway");
    }

    // Create application state
    let state = create_shared_state(config.clone(), store)?;

    // Create application router
    let app = create_app(state);

    // Parse server address
    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
