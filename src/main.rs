// src/main.rs

use std::error::Error;

use mirage::{config, logging, ui};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    config::initialize_config()?;
    let config = config::get_config();

    let _logger = logging::init_logging(&config.log_level)?;
    log::info!("starting mirage dashboard");

    ui::run_ui(config).await?;

    log::info!("mirage dashboard shut down");
    Ok(())
}
