//! Token prices and the price feed abstraction

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// USD price of a single token as published by the price feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPrice {
    pub currency: String,
    pub price: f64,
    pub date: Option<DateTime<Utc>>,
}

impl TokenPrice {
    pub fn new(currency: &str, price: f64) -> Self {
        Self {
            currency: currency.to_string(),
            price,
            date: None,
        }
    }
}

/// Immutable set of token prices keyed by currency.
///
/// Built once per fetch. When the feed lists a currency more than once the
/// last entry wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    tokens: BTreeMap<String, TokenPrice>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, currency: &str) -> Option<&TokenPrice> {
        self.tokens.get(currency)
    }

    /// Price of `currency` if it is listed, regardless of its sign.
    pub fn price_of(&self, currency: &str) -> Option<f64> {
        self.get(currency).map(|t| t.price)
    }

    /// Tokens ordered by currency.
    pub fn iter(&self) -> impl Iterator<Item = &TokenPrice> {
        self.tokens.values()
    }
}

impl FromIterator<TokenPrice> for PriceTable {
    fn from_iter<I: IntoIterator<Item = TokenPrice>>(iter: I) -> Self {
        let mut tokens = BTreeMap::new();
        for token in iter {
            tokens.insert(token.currency.clone(), token);
        }
        Self { tokens }
    }
}

impl From<Vec<TokenPrice>> for PriceTable {
    fn from(tokens: Vec<TokenPrice>) -> Self {
        tokens.into_iter().collect()
    }
}

#[async_trait]
pub trait PriceFeed: Send + Sync {
    async fn fetch_prices(&self) -> Result<Vec<TokenPrice>>;
}
