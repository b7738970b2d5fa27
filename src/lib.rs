pub mod cli;
pub mod config;
pub mod core;
pub mod log;
pub mod store;

use crate::core::{CatalogService, SequenceIdGenerator, SystemClock};
use anyhow::Result;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Add {
        title: Option<String>,
        price: Option<Decimal>,
    },
    List,
    Stats,
}

/// Wires the configured store, an id sequence continuing after the highest
/// stored id, and the system clock into a [`CatalogService`].
pub async fn build_service(config: &config::AppConfig) -> Result<CatalogService> {
    let store = store::open_store(config)?;
    let next_id = store
        .find_all()
        .await?
        .iter()
        .map(|item| item.id() + 1)
        .max()
        .unwrap_or(0);
    debug!("Item ids continue from {next_id}");

    Ok(CatalogService::new(
        store,
        Arc::new(SequenceIdGenerator::starting_at(next_id)),
        Arc::new(SystemClock),
    ))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Pricebook starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load_or_default()?,
    };
    debug!("Loaded config: {config:#?}");

    let service = build_service(&config).await?;

    match command {
        AppCommand::Add { title, price } => {
            cli::items::run_add(&service, title.as_deref(), price).await
        }
        AppCommand::List => cli::items::run_list(&service).await,
        AppCommand::Stats => cli::stats::run(&service).await,
    }
}
