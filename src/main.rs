mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod util;

use dioxus_logger::tracing;

use crate::{config::Config, data::case_counter::CaseCounterRepository, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let db = startup::connect_to_database(&config).await?;

    let case_number = CaseCounterRepository::new(&db).current().await?;
    tracing::info!("Database ready, latest case number is {}", case_number);

    bot::start::start_bot(&config, db).await
}
