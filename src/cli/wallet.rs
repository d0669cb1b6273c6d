use super::ui;
use crate::core::balance::{BalanceListDeriver, FormattedWalletBalance, WalletBalance};
use crate::core::price::PriceTable;
use anyhow::Result;
use comfy_table::Cell;

pub fn render(rows: &[FormattedWalletBalance]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Blockchain"),
        ui::header_cell("Amount"),
        ui::header_cell("USD Value"),
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.key()),
            Cell::new(&row.blockchain),
            ui::number_cell(row.formatted.clone()),
            ui::usd_cell(row.usd_value),
        ]);
    }

    let total: f64 = rows.iter().map(|r| r.usd_value).sum();
    format!(
        "{}\n\n{}\n\nTotal Value ({}): {}",
        ui::style_text("Wallet", ui::StyleType::Title),
        table,
        ui::style_text("USD", ui::StyleType::TotalLabel),
        ui::style_text(&format!("{total:.2}"), ui::StyleType::TotalValue)
    )
}

/// Prints the wallet table. The deriver is owned by the caller so repeated
/// renders of unchanged balances reuse its sorted rows.
pub fn run(
    deriver: &mut BalanceListDeriver,
    balances: &[WalletBalance],
    prices: &PriceTable,
) -> Result<()> {
    let rows = deriver.derive(balances, prices);
    println!("{}", render(&rows));
    Ok(())
}
