//! Wallet balances and the pipeline that prepares them for display
//!
//! Balances go through filter, priority sort, amount formatting and USD
//! enrichment, in that order. Rows with unknown chains or non-positive amounts
//! are dropped. Missing prices give a USD value of zero instead of an error.

use super::price::PriceTable;
use super::priority::PriorityTable;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: String,
    pub amount: f64,
    pub blockchain: String,
}

impl WalletBalance {
    pub fn new(currency: &str, amount: f64, blockchain: &str) -> Self {
        Self {
            currency: currency.to_string(),
            amount,
            blockchain: blockchain.to_string(),
        }
    }
}

/// A balance that survived filtering, ready to be rendered as one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedWalletBalance {
    pub currency: String,
    pub amount: f64,
    pub blockchain: String,
    pub formatted: String,
    pub usd_value: f64,
}

impl FormattedWalletBalance {
    fn from_balance(balance: &WalletBalance) -> Self {
        Self {
            currency: balance.currency.clone(),
            amount: balance.amount,
            blockchain: balance.blockchain.clone(),
            formatted: format_amount(balance.amount),
            usd_value: 0.0,
        }
    }

    /// Stable identity of the row, its currency. Rendering layers key rows by
    /// this, never by position. Loaded configs hold each currency once, see
    /// [`AppConfig::validate`](super::config::AppConfig::validate).
    pub fn key(&self) -> &str {
        &self.currency
    }
}

/// Renders `amount` without fractional digits. Halfway values round away from
/// zero, so `2.5` becomes `"3"`.
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.round();
    // round() keeps the sign of small negatives, avoid printing "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}")
}

fn usd_value(amount: f64, price: Option<f64>) -> f64 {
    match price {
        Some(price) if price.is_finite() && price > 0.0 => amount * price,
        _ => 0.0,
    }
}

/// Filters, orders and formats balances. The USD value of every returned row
/// is left at zero, see [`enrich`].
///
/// A balance is kept when its chain priority is non-negative and its amount is
/// positive. Rows are ordered by descending priority and the sort is stable, so
/// equal priorities keep their input order.
pub fn sort_and_format<P>(balances: &[WalletBalance], priority_of: P) -> Vec<FormattedWalletBalance>
where
    P: Fn(&str) -> i32,
{
    let mut ranked: Vec<(i32, &WalletBalance)> = balances
        .iter()
        .map(|balance| (priority_of(&balance.blockchain), balance))
        .filter(|(priority, balance)| *priority >= 0 && balance.amount > 0.0)
        .collect();
    ranked.sort_by_key(|(priority, _)| Reverse(*priority));

    ranked
        .into_iter()
        .map(|(_, balance)| FormattedWalletBalance::from_balance(balance))
        .collect()
}

/// Fills in `usd_value` for each row from `price_of`.
pub fn enrich<Q>(rows: &mut [FormattedWalletBalance], price_of: Q)
where
    Q: Fn(&str) -> Option<f64>,
{
    for row in rows {
        row.usd_value = usd_value(row.amount, price_of(&row.currency));
    }
}

/// Runs the whole pipeline once.
pub fn derive<P, Q>(
    balances: &[WalletBalance],
    priority_of: P,
    price_of: Q,
) -> Vec<FormattedWalletBalance>
where
    P: Fn(&str) -> i32,
    Q: Fn(&str) -> Option<f64>,
{
    let mut rows = sort_and_format(balances, priority_of);
    enrich(&mut rows, price_of);
    rows
}

/// Bitwise comparison of amounts, so a NaN amount still matches itself.
fn same_balances(lhs: &[WalletBalance], rhs: &[WalletBalance]) -> bool {
    lhs.len() == rhs.len()
        && lhs.iter().zip(rhs).all(|(a, b)| {
            a.currency == b.currency
                && a.blockchain == b.blockchain
                && a.amount.to_bits() == b.amount.to_bits()
        })
}

struct Memo {
    balances: Vec<WalletBalance>,
    priorities: Arc<PriorityTable>,
    rows: Vec<FormattedWalletBalance>,
}

/// Memoizing front end for [`derive`].
///
/// The filter, sort and format stage is cached against the balances and the
/// identity of the priority table. Prices only feed the last stage, so a price
/// change alone never re-sorts the list.
pub struct BalanceListDeriver {
    priorities: Arc<PriorityTable>,
    memo: Option<Memo>,
    recomputations: usize,
}

impl BalanceListDeriver {
    pub fn new(priorities: Arc<PriorityTable>) -> Self {
        Self {
            priorities,
            memo: None,
            recomputations: 0,
        }
    }

    pub fn priorities(&self) -> &Arc<PriorityTable> {
        &self.priorities
    }

    pub fn set_priorities(&mut self, priorities: Arc<PriorityTable>) {
        self.priorities = priorities;
    }

    /// Number of times the filter, sort and format stage actually ran.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    fn is_stale(&self, balances: &[WalletBalance]) -> bool {
        match &self.memo {
            Some(memo) => {
                !Arc::ptr_eq(&memo.priorities, &self.priorities)
                    || !same_balances(&memo.balances, balances)
            }
            None => true,
        }
    }

    pub fn derive(
        &mut self,
        balances: &[WalletBalance],
        prices: &PriceTable,
    ) -> Vec<FormattedWalletBalance> {
        if self.is_stale(balances) {
            let priorities = Arc::clone(&self.priorities);
            let rows = sort_and_format(balances, |chain| priorities.priority_of(chain));
            debug!(
                "Derived {} of {} balances for display",
                rows.len(),
                balances.len()
            );
            self.memo = Some(Memo {
                balances: balances.to_vec(),
                priorities,
                rows,
            });
            self.recomputations += 1;
        }

        let mut rows = self
            .memo
            .as_ref()
            .map(|memo| memo.rows.clone())
            .unwrap_or_default();
        enrich(&mut rows, |currency| prices.price_of(currency));
        rows
    }
}
