use keybridge::{observability::init_tracing, startup, Config, Result, APP_NAME, VERSION};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (optional - won't fail if missing).
    // This must happen before any config is read from environment.
    if let Err(err) = dotenvy::dotenv() {
        if !err.to_string().contains("not found") {
            eprintln!("Warning: Error loading .env file: {}", err);
        }
    }

    let config = Config::from_env()?;
    init_tracing(&config.observability)?;

    info!(app_name = APP_NAME, version = VERSION, "Starting keybridge secret resolution service");
    info!(
        stores = config.stores.len(),
        merge_enabled = config.merge.is_some(),
        api_bind_address = %config.api.bind_address,
        api_port = config.api.port,
        "Loaded configuration from environment"
    );

    // Phase 1 (registry build + config merge) runs inside startup::run and is
    // fatal on any failure; the API only starts once it completes.
    if let Err(err) = startup::run(config).await {
        error!(error = %err, "Service terminated with error");
        std::process::exit(1);
    }

    Ok(())
}
