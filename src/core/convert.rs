//! Token to token conversion through USD prices

use super::price::PriceTable;
use thiserror::Error;
use tracing::debug;

/// Reasons a conversion request is rejected. The display text is shown to
/// the user as is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Please enter a valid amount.")]
    InvalidAmount,

    #[error("Please select both currencies.")]
    MissingSelection,

    #[error("Cannot swap the same currency.")]
    SameCurrency,

    #[error("Price unavailable for selected token.")]
    PriceUnavailable,
}

/// Parses a user supplied amount. Only finite, strictly positive numbers are
/// accepted.
pub fn parse_amount(text: &str) -> Result<f64, ConversionError> {
    let amount: f64 = text
        .trim()
        .parse()
        .map_err(|_| ConversionError::InvalidAmount)?;
    validate_amount(amount)?;
    Ok(amount)
}

fn validate_amount(amount: f64) -> Result<(), ConversionError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ConversionError::InvalidAmount)
    }
}

fn usable_price(tokens: &PriceTable, currency: &str) -> Result<f64, ConversionError> {
    match tokens.price_of(currency) {
        Some(price) if price.is_finite() && price > 0.0 => Ok(price),
        _ => Err(ConversionError::PriceUnavailable),
    }
}

/// Converts `amount` of `from` into `to` using the USD price of both tokens.
///
/// Checks run in a fixed order: amount, selections, same currency, prices.
/// The result is not rounded.
pub fn convert(
    tokens: &PriceTable,
    from: &str,
    to: &str,
    amount: f64,
) -> Result<f64, ConversionError> {
    validate_amount(amount)?;

    if from.trim().is_empty() || to.trim().is_empty() {
        return Err(ConversionError::MissingSelection);
    }
    if from == to {
        return Err(ConversionError::SameCurrency);
    }

    let from_price = usable_price(tokens, from)?;
    let to_price = usable_price(tokens, to)?;

    let usd_value = amount * from_price;
    let converted = usd_value / to_price;
    debug!(
        "Converted {} {} ({} USD) to {} {}",
        amount, from, usd_value, converted, to
    );
    Ok(converted)
}
