//! # fxledger
//!
//! A single-entity ledger that keeps balances in several currencies,
//! converts between them through an exchange-rate table fixed at
//! construction, and lets currencies be enabled or disabled at runtime.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on it rather than on the individual
//! `fxl-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use fxledger::prelude::*;
//!
//! let rates = ExchangeRateTable::from_pairs([
//!     ("USD", 0.014),
//!     ("EUR", 0.0125),
//!     ("RUB", 1.0),
//! ])?;
//! let mut ledger = Ledger::new(rates);
//!
//! ledger.deposit(40.0, "USD")?;
//! ledger.deposit(7500.0, "RUB")?;
//! ledger.disable_currency("USD", "RUB")?;
//!
//! assert_eq!(ledger.get_enabled_currencies(), ["EUR", "RUB"]);
//! assert_eq!(ledger.holdings()[0].to_string(), "10357.14 RUB");
//! assert!(matches!(
//!     ledger.withdraw(1.0, "USD"),
//!     Err(Error::CurrencyDisabled(_))
//! ));
//! # Ok::<(), fxledger::core::Error>(())
//! ```
//!
//! With the `serde` feature, an [`ExchangeRateTable`](currencies::ExchangeRateTable)
//! can be loaded from any serde format as a map of code to rate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use fxl_core as core;

/// Currency codes, money, and rate tables.
pub use fxl_currencies as currencies;

/// The ledger and its shared handle.
pub use fxl_ledger as ledger;

/// The commonly used types in one import.
pub mod prelude {
    pub use fxl_core::{Amount, Error, Rate, Real, Result};
    pub use fxl_currencies::{CurrencyCode, ExchangeRateTable, Money};
    pub use fxl_ledger::{Ledger, SharedLedger};
}
