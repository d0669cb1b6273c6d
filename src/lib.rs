pub mod cli;
pub mod core;
pub mod providers;

use crate::core::balance::BalanceListDeriver;
use crate::core::config::AppConfig;
use crate::core::price::{PriceFeed, PriceTable};
use crate::core::snapshot::PriceSnapshot;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub enum AppCommand {
    Prices,
    Swap {
        amount: String,
        from: String,
        to: String,
    },
    Wallet,
}

async fn load_prices(
    snapshot: &PriceSnapshot,
    feed: &(dyn PriceFeed + Send + Sync),
) -> Result<Arc<PriceTable>> {
    let pb = cli::ui::new_spinner("Fetching prices...");
    let result = snapshot.refresh(feed).await;
    pb.finish_and_clear();

    let prices = result.context("Failed to load token prices")?;
    info!("Loaded prices for {} tokens", prices.len());
    Ok(prices)
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let feed = providers::SwitcheoPriceFeed::new(&config.providers.prices.base_url);
    let snapshot = PriceSnapshot::new();
    let prices = load_prices(&snapshot, &feed).await?;

    match command {
        AppCommand::Prices => cli::prices::run(&prices, &config.icons),
        AppCommand::Swap { amount, from, to } => cli::swap::run(&prices, &amount, &from, &to),
        AppCommand::Wallet => {
            let mut deriver = BalanceListDeriver::new(Arc::new(config.priorities));
            cli::wallet::run(&mut deriver, &config.balances, &prices)
        }
    }
}
