//! A [`Ledger`] behind a single lock.
//!
//! [`SharedLedger`] is a cloneable handle for hosts that touch one ledger
//! from several threads. Every method locks the whole ledger for the
//! duration of the call; there is no finer-grained locking.

use crate::ledger::Ledger;
use fxl_core::{errors::Result, Amount};
use fxl_currencies::{CurrencyCode, ExchangeRateTable, Money};
use std::sync::{Arc, Mutex, PoisonError};

/// A thread-safe, reference-counted handle to a [`Ledger`].
///
/// Clones share the same ledger.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    /// Create a shared ledger over `rates`.
    pub fn new(rates: ExchangeRateTable) -> Self {
        Self::from(Ledger::new(rates))
    }

    /// Run `f` with exclusive access to the ledger.
    ///
    /// Use this to compose several operations under one lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut Ledger) -> R) -> R {
        // Ledger methods never leave partial state behind, so the value
        // inside a poisoned lock is still consistent.
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// A copy of the current ledger state.
    pub fn snapshot(&self) -> Ledger {
        self.with(|ledger| ledger.clone())
    }

    /// See [`Ledger::deposit`].
    pub fn deposit(&self, amount: Amount, currency: &str) -> Result<()> {
        self.with(|ledger| ledger.deposit(amount, currency))
    }

    /// See [`Ledger::withdraw`].
    pub fn withdraw(&self, amount: Amount, currency: &str) -> Result<()> {
        self.with(|ledger| ledger.withdraw(amount, currency))
    }

    /// See [`Ledger::convert`].
    pub fn convert(&self, amount: Amount, from: &str, to: &str) -> Result<Amount> {
        self.with(|ledger| ledger.convert(amount, from, to))
    }

    /// See [`Ledger::get_balance`].
    pub fn get_balance(&self, currency: &str) -> Result<Amount> {
        self.with(|ledger| ledger.get_balance(currency))
    }

    /// See [`Ledger::get_total_balance_in_currency`].
    pub fn get_total_balance_in_currency(&self, target: &str) -> Result<Amount> {
        self.with(|ledger| ledger.get_total_balance_in_currency(target))
    }

    /// See [`Ledger::enable_currency`].
    pub fn enable_currency(&self, currency: impl Into<CurrencyCode>) {
        self.with(|ledger| ledger.enable_currency(currency))
    }

    /// See [`Ledger::disable_currency`].
    pub fn disable_currency(&self, currency: &str, target: &str) -> Result<()> {
        self.with(|ledger| ledger.disable_currency(currency, target))
    }

    /// Owned copy of [`Ledger::get_enabled_currencies`].
    pub fn get_enabled_currencies(&self) -> Vec<CurrencyCode> {
        self.with(|ledger| ledger.get_enabled_currencies().to_vec())
    }

    /// See [`Ledger::is_currency_enabled`].
    pub fn is_currency_enabled(&self, currency: &str) -> bool {
        self.with(|ledger| ledger.is_currency_enabled(currency))
    }

    /// See [`Ledger::holdings`].
    pub fn holdings(&self) -> Vec<Money> {
        self.with(|ledger| ledger.holdings())
    }
}

impl From<Ledger> for SharedLedger {
    fn from(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }
}
