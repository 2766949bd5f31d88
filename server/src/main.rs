use std::net::SocketAddr;

use faqbot_dev_server::{app, AppState, DEFAULT_ADDR};
use miette::{Context, IntoDiagnostic, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let addr: SocketAddr = std::env::var("FAQBOT_DEV_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_owned())
        .parse()
        .into_diagnostic()
        .wrap_err("FAQBOT_DEV_ADDR is not a socket address")?;

    tracing::info!("listening on {addr}");

    axum::Server::bind(&addr)
        .serve(app(AppState::default()).into_make_service())
        .await
        .into_diagnostic()
        .wrap_err("Server stopped unexpectedly")?;

    Ok(())
}
