use super::ui;
use crate::core::config::IconConfig;
use crate::core::price::PriceTable;
use anyhow::Result;
use comfy_table::Cell;

pub fn render(prices: &PriceTable, icons: &IconConfig) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Price (USD)"),
        ui::header_cell("Updated"),
        ui::header_cell("Icon"),
        ui::header_cell("Fallback Icon"),
    ]);

    for token in prices.iter() {
        let (icon, fallback) = icons.icon_urls(&token.currency);
        table.add_row(vec![
            Cell::new(&token.currency),
            ui::number_cell(format!("{:.6}", token.price)),
            ui::format_optional_cell(token.date, |d| d.format("%Y-%m-%d %H:%M").to_string()),
            Cell::new(ui::style_text(&icon, ui::StyleType::Subtle)),
            Cell::new(ui::style_text(&fallback, ui::StyleType::Subtle)),
        ]);
    }

    format!(
        "{}\n\n{}\n\n{} tokens",
        ui::style_text("Token Prices", ui::StyleType::Title),
        table,
        prices.len()
    )
}

pub fn run(prices: &PriceTable, icons: &IconConfig) -> Result<()> {
    println!("{}", render(prices, icons));
    Ok(())
}
