use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use turnos_api::{ApiConfig, ApiServer};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ApiConfig::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let server = ApiServer::from_config(config).context("failed to open database")?;
    server.run().await.context("server error")?;

    Ok(())
}
