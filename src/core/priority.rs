//! Blockchain display priorities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Priority of a blockchain label that is not in the table. It is below the
/// display threshold, so balances on unknown chains are hidden.
pub const UNKNOWN_PRIORITY: i32 = -99;

const DEFAULT_PRIORITIES: [(&str, i32); 5] = [
    ("Osmosis", 100),
    ("Ethereum", 50),
    ("Arbitrum", 30),
    ("Zilliqa", 20),
    ("Neo", 20),
];

/// Lookup table from blockchain label to priority. Higher sorts first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityTable {
    priorities: HashMap<String, i32>,
}

impl PriorityTable {
    pub fn new(priorities: HashMap<String, i32>) -> Self {
        Self { priorities }
    }

    /// Priority of `blockchain`, or [`UNKNOWN_PRIORITY`] when the label is not
    /// listed. Labels are matched exactly.
    pub fn priority_of(&self, blockchain: &str) -> i32 {
        self.priorities
            .get(blockchain)
            .copied()
            .unwrap_or(UNKNOWN_PRIORITY)
    }

    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        DEFAULT_PRIORITIES
            .iter()
            .map(|(chain, priority)| (chain.to_string(), *priority))
            .collect::<HashMap<_, _>>()
            .into()
    }
}

impl From<HashMap<String, i32>> for PriorityTable {
    fn from(priorities: HashMap<String, i32>) -> Self {
        Self::new(priorities)
    }
}
