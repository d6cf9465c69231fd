//! Core: configuration and environment setup

pub mod config;

pub use config::Config;

use crate::utils::AppResult;
use crate::utils::logger::init_logger_with_file;

/// Load `.env`, then initialise logging from the resulting configuration
pub fn setup_environment() -> AppResult<Config> {
    // .env is optional
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)?;
    }
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    tracing::debug!(
        environment = %config.environment,
        production = config.is_production(),
        "Environment loaded"
    );
    Ok(config)
}
