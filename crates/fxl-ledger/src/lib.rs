//! # fxl-ledger
//!
//! A single-entity ledger holding balances in several currencies, converting
//! between them through a rate table fixed at construction, and letting
//! currencies be enabled or disabled (with a sweep of their funds) at
//! runtime.
//!
//! Mutations are reported through `tracing` at `debug` level, and sweeps at
//! `info`. Errors are returned, never logged.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The ledger and its operations.
pub mod ledger;

/// The lock-guarded shared handle.
pub mod shared;

pub use ledger::Ledger;
pub use shared::SharedLedger;
