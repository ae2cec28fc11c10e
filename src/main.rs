mod config;
mod detect;
mod lang;
mod outcome;
mod pipeline;
mod respond;
mod server;
mod translate;

pub const USER_AGENT: &str = concat!("parley/", env!("CARGO_PKG_VERSION"));

use std::sync::Arc;

use clap::Parser;
use config::{Args, Config};
use detect::WhatlangDetector;
use pipeline::Pipeline;
use reqwest::Client;
use tracing::info;
use translate::GoogleTranslateClient;

/// TCP connection establishment timeout for the translation service.
const CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("parley=info".parse()?),
        )
        .init();

    let config = Config::try_from(Args::parse())?;
    info!(
        translate_url = %config.translate_url,
        origins = config.allowed_origins.len(),
        "starting parley"
    );

    let http = Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?;
    let translator =
        GoogleTranslateClient::new(http, config.translate_url.clone(), config.translate_timeout);
    let detector = WhatlangDetector::new(config.min_confidence)
        .require_reliable(config.require_reliable);
    let pipeline = Arc::new(Pipeline::new(detector, translator));

    let app = server::router(pipeline, config.allowed_origins.clone());
    server::serve(config.addr, app)
        .await
        .inspect_err(|e| tracing::error!("server failed: {e}"))?;

    info!("server stopped");
    Ok(())
}
