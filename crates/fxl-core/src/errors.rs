//! Error types for fxledger.
//!
//! Every failure the ledger can report is a local validation failure, so a
//! single `thiserror`-derived enum covers the whole workspace.  The
//! [`ensure!`] and [`fail!`] macros keep precondition checks on one line.

use thiserror::Error;

/// The error type used throughout fxledger.
///
/// Currency codes are carried as plain strings so this crate stays free of
/// the currency types defined downstream.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An operation referenced a currency that is not enabled.
    #[error("operations with currency {0} are disabled")]
    CurrencyDisabled(String),

    /// A withdrawal asked for more than the available balance.
    #[error("insufficient funds in {currency}: requested {requested}, available {available}")]
    InsufficientFunds {
        /// The currency of the withdrawal.
        currency: String,
        /// The amount the caller asked for.
        requested: f64,
        /// The balance held at the time of the request.
        available: f64,
    },

    /// A conversion referenced a currency absent from the rate table.
    #[error("exchange rate not found for currency {0}")]
    RateNotFound(String),

    /// The target of a disable-with-sweep is not (or would not stay) enabled.
    #[error("target currency {0} is disabled")]
    TargetCurrencyDisabled(String),

    /// A rate table entry is not a finite, strictly positive number.
    #[error("invalid exchange rate {rate} for currency {currency}")]
    InvalidRate {
        /// The currency the rate was supplied for.
        currency: String,
        /// The rejected rate.
        rate: f64,
    },
}

/// Shorthand `Result` type used throughout fxledger.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` early if `$cond` is false.
///
/// The error expression is only evaluated when the check fails.
///
/// # Example
/// ```
/// use fxl_core::{ensure, errors::Error};
/// fn enabled(flag: bool) -> fxl_core::errors::Result<()> {
///     ensure!(flag, Error::CurrencyDisabled("USD".into()));
///     Ok(())
/// }
/// assert!(enabled(true).is_ok());
/// assert_eq!(enabled(false), Err(Error::CurrencyDisabled("USD".into())));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err(::core::convert::From::from($err));
        }
    };
}

/// Return `Err($err)` immediately.
///
/// # Example
/// ```
/// use fxl_core::{fail, errors::Error};
/// fn always_err() -> fxl_core::errors::Result<()> {
///     fail!(Error::RateNotFound("XAU".into()));
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($err:expr $(,)?) => {
        return Err(::core::convert::From::from($err))
    };
}
