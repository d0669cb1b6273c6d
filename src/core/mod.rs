//! Core business logic abstractions

pub mod balance;
pub mod config;
pub mod convert;
pub mod log;
pub mod price;
pub mod priority;
pub mod snapshot;

// Re-export main types for cleaner imports
pub use balance::{BalanceListDeriver, FormattedWalletBalance, WalletBalance};
pub use convert::{ConversionError, convert, parse_amount};
pub use price::{PriceFeed, PriceTable, TokenPrice};
pub use priority::{PriorityTable, UNKNOWN_PRIORITY};
pub use snapshot::PriceSnapshot;
