#![recursion_limit = "256"]

mod config;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::HostConfig::from_env()?;
    let conf = get_configuration(None)?;

    let app = routes::app(&config, conf.leptos_options);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, api_url = client::net::api::api_base_url(), "portal listening");
    axum::serve(listener, app).await?;
    Ok(())
}
