use color_eyre::eyre::Result;
use dotenv::dotenv;
use schedcast_api::config::ApiConfig;
use schedcast_store::{ScheduleManager, ScheduleStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Load the schedule document, falling back to defaults if absent
    let manager = ScheduleManager::open(ScheduleStore::from_env());

    // Start the config server for the image renderer
    schedcast_api::start_server(config, manager).await?;

    Ok(())
}
