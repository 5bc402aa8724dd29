mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let port = config.port;
    if config.base_api_url.is_none() {
        tracing::warn!("BASE_API_URL not set; client uses its build-time default");
    }

    let app = routes::app(config)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "auth pages listening");
    axum::serve(listener, app).await?;
    Ok(())
}
