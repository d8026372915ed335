use food_court::{app, logging, server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::load()?;
    logging::init_from_env();

    tracing::info!(
        host = %config.host,
        port = %config.port,
        environment = ?config.environment,
        "Starting food-court"
    );

    server::serve(app(&config), &config).await?;

    Ok(())
}
