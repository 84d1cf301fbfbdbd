use storefront_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        config.log_dir.as_deref(),
    );

    print_banner();
    tracing::info!("Storefront server starting...");

    // 2. Initialize server state (seeds catalog and reviews)
    let state = ServerState::initialize(&config);

    // 3. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);
    server.run().await?;

    Ok(())
}
