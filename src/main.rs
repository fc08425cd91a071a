//! BulkBite server
//!
//! Reads its configuration from the YAML file named by `BULKBITE_CONFIG`
//! (defaults apply when unset), optionally seeds the demo dataset and serves
//! the REST API until Ctrl+C or SIGTERM.

use anyhow::Result;
use bulkbite::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "BULKBITE_CONFIG";

fn load_config() -> Result<MarketConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => MarketConfig::from_yaml_file(path),
        Err(_) => Ok(MarketConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    let address = config.bind_address();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let service = MarketService::new(Arc::new(InMemoryMarketStore::new()))
        .with_group_policy(config.groups.into());

    if config.seed_demo_data {
        seed_demo_data(&service).await?;
    }

    let module = MarketplaceModule;
    tracing::info!(
        module = module.name(),
        version = module.version(),
        entities = ?module.entity_types(),
        "starting"
    );

    ServerBuilder::new()
        .with_service(service)
        .with_cors(config.cors)
        .register_module(module)?
        .serve(&address)
        .await
}
