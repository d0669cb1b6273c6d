use super::ui;
use crate::core::convert::{ConversionError, convert, parse_amount};
use crate::core::price::PriceTable;
use anyhow::Result;
use tracing::debug;

/// Number of decimals shown for a converted amount.
pub const DISPLAY_DECIMALS: usize = 6;

pub fn swap(prices: &PriceTable, amount: &str, from: &str, to: &str) -> Result<f64, ConversionError> {
    let amount = parse_amount(amount)?;
    convert(prices, from, to, amount)
}

pub fn render(result: &Result<f64, ConversionError>, to: &str) -> String {
    match result {
        Ok(converted) => format!(
            "Converted Amount: {} {}",
            ui::style_text(
                &format!("{:.*}", DISPLAY_DECIMALS, converted),
                ui::StyleType::TotalValue
            ),
            to
        ),
        Err(e) => ui::style_text(&e.to_string(), ui::StyleType::Error),
    }
}

/// Prints the conversion or the reason it was rejected. Rejected input is
/// not an application failure.
pub fn run(prices: &PriceTable, amount: &str, from: &str, to: &str) -> Result<()> {
    let result = swap(prices, amount, from, to);
    if let Err(e) = &result {
        debug!(?e, amount, from, to, "Swap rejected");
    }
    println!("{}", render(&result, to));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::price::TokenPrice;

    fn prices() -> PriceTable {
        PriceTable::from(vec![
            TokenPrice::new("USD", 1.0),
            TokenPrice::new("EUR", 0.9),
        ])
    }

    #[test]
    fn test_swap_and_render() {
        let result = swap(&prices(), "100", "USD", "EUR");
        assert!(render(&result, "EUR").contains("111.111111"));
        assert!(render(&result, "EUR").ends_with(" EUR"));
    }

    #[test]
    fn test_swap_rejects_bad_amount_text() {
        assert_eq!(
            swap(&prices(), "ten", "USD", "EUR"),
            Err(ConversionError::InvalidAmount)
        );
    }

    #[test]
    fn test_render_error_message() {
        let result = swap(&prices(), "5", "USD", "GBP");
        assert!(render(&result, "GBP").contains("Price unavailable for selected token."));
    }

    #[test]
    fn test_run_reports_rejection_without_failing() {
        assert!(run(&prices(), "5", "USD", "USD").is_ok());
    }
}
