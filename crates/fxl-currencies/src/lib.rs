//! # fxl-currencies
//!
//! Currency codes, money, and exchange-rate tables.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Currency codes and tagged amounts.
pub mod currency;

/// The exchange-rate table and conversion arithmetic.
pub mod exchange_rate;

pub use currency::{CurrencyCode, Money};
pub use exchange_rate::ExchangeRateTable;
