use crate::core::price::{PriceFeed, TokenPrice};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Price feed served as a JSON array at `{base_url}/prices.json`.
pub struct SwitcheoPriceFeed {
    base_url: String,
}

impl SwitcheoPriceFeed {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FeedEntry {
    currency: Option<String>,
    price: Option<f64>,
    date: Option<String>,
}

impl FeedEntry {
    fn into_token(self) -> Option<TokenPrice> {
        let currency = self.currency?.trim().to_string();
        if currency.is_empty() {
            return None;
        }
        let price = self.price.filter(|p| p.is_finite() && *p > 0.0)?;
        Some(TokenPrice {
            currency,
            price,
            date: self.date.and_then(|d| d.parse::<DateTime<Utc>>().ok()),
        })
    }
}

/// Decodes the feed body. Entries that do not describe a token with a positive
/// price are skipped, the rest keep feed order.
pub(crate) fn parse_feed(body: &str) -> Result<Vec<TokenPrice>> {
    if body.trim().is_empty() {
        return Err(anyhow!("Received empty price feed response"));
    }

    let entries: Vec<Value> = serde_json::from_str(body)
        .with_context(|| format!("Failed to parse price feed response: '{body}'"))?;

    let total = entries.len();
    let mut tokens = Vec::with_capacity(total);
    for (index, entry) in entries.into_iter().enumerate() {
        let token = serde_json::from_value::<FeedEntry>(entry.clone())
            .ok()
            .and_then(FeedEntry::into_token);
        match token {
            Some(token) => tokens.push(token),
            None => warn!(index, entry = %entry, "Skipping malformed price feed entry"),
        }
    }

    debug!("Accepted {} of {} price feed entries", tokens.len(), total);
    Ok(tokens)
}

#[async_trait]
impl PriceFeed for SwitcheoPriceFeed {
    async fn fetch_prices(&self) -> Result<Vec<TokenPrice>> {
        let url = format!("{}/prices.json", self.base_url);
        debug!("Requesting prices from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("tokenswap/0.1")
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?
            .error_for_status()
            .with_context(|| format!("Price feed returned an error status: {url}"))?;

        let response_text = response
            .text()
            .await
            .context("Failed to get price feed response text")?;

        parse_feed(&response_text)
    }
}
