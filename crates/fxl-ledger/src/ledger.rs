//! The multi-currency [`Ledger`].
//!
//! A ledger holds one balance per currency code, a frozen
//! [`ExchangeRateTable`], and the ordered set of currently enabled codes.
//! Every fallible operation checks all of its preconditions before touching
//! state, so an `Err` always leaves the ledger exactly as it was.

use fxl_core::{
    ensure,
    errors::{Error, Result},
    Amount,
};
use fxl_currencies::{CurrencyCode, ExchangeRateTable, Money};
use std::collections::HashMap;
use tracing::{debug, info, trace};

/// Balances for a set of currencies converted through a fixed rate table.
///
/// The enabled set starts as the rate table's codes in table order. Rates
/// are a snapshot taken at construction and cannot be changed afterwards.
///
/// # Example
/// ```
/// use fxl_currencies::ExchangeRateTable;
/// use fxl_ledger::Ledger;
///
/// let rates = ExchangeRateTable::from_pairs([("USD", 0.014), ("RUB", 1.0)]).unwrap();
/// let mut ledger = Ledger::new(rates);
/// ledger.deposit(40.0, "USD").unwrap();
/// ledger.disable_currency("USD", "RUB").unwrap();
///
/// assert_eq!(ledger.get_enabled_currencies(), ["RUB"]);
/// assert!((ledger.get_balance("RUB").unwrap() - 2857.142857).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    rates: ExchangeRateTable,
    enabled: Vec<CurrencyCode>,
    balances: HashMap<CurrencyCode, Amount>,
}

impl Ledger {
    /// Create a ledger over `rates` with every listed currency enabled and
    /// no balances.
    pub fn new(rates: ExchangeRateTable) -> Self {
        let enabled = rates.codes().cloned().collect();
        Self {
            rates,
            enabled,
            balances: HashMap::new(),
        }
    }

    // ── Balance operations ───────────────────────────────────────────────

    /// Add `amount` to the balance of `currency`.
    ///
    /// The amount is not sign-checked.
    pub fn deposit(&mut self, amount: Amount, currency: &str) -> Result<()> {
        self.check_enabled(currency)?;
        let balance = self.credit(amount, currency);
        debug!(currency, amount, balance, "deposit");
        Ok(())
    }

    /// Subtract `amount` from the balance of `currency`.
    ///
    /// Fails with [`Error::InsufficientFunds`] if the balance (0 when the
    /// currency was never funded) is smaller than `amount`.
    pub fn withdraw(&mut self, amount: Amount, currency: &str) -> Result<()> {
        self.check_enabled(currency)?;
        let available = self.balance_of(currency);
        ensure!(
            available >= amount,
            Error::InsufficientFunds {
                currency: currency.to_owned(),
                requested: amount,
                available,
            }
        );
        let balance = self.credit(-amount, currency);
        debug!(currency, amount, balance, "withdraw");
        Ok(())
    }

    /// Convert `amount` from one enabled currency to another.
    ///
    /// Both codes must be enabled and have rates; `from` is checked first.
    pub fn convert(&self, amount: Amount, from: &str, to: &str) -> Result<Amount> {
        self.check_enabled(from)?;
        self.check_enabled(to)?;
        self.rates.convert(amount, from, to)
    }

    /// The balance of `currency`, or 0 if it was never funded.
    pub fn get_balance(&self, currency: &str) -> Result<Amount> {
        self.check_enabled(currency)?;
        Ok(self.balance_of(currency))
    }

    /// The value of every enabled balance, expressed in `target`.
    ///
    /// Balances of disabled currencies are skipped. An enabled, funded
    /// currency without a rate fails the whole call with
    /// [`Error::RateNotFound`].
    pub fn get_total_balance_in_currency(&self, target: &str) -> Result<Amount> {
        self.check_enabled(target)?;
        self.rates.rate(target)?;
        self.enabled
            .iter()
            .filter_map(|code| self.balances.get(code).map(|&balance| (code, balance)))
            .try_fold(0.0, |total, (code, balance)| -> Result<Amount> {
                Ok(total + self.rates.convert(balance, code, target)?)
            })
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Enable `currency`. Enabling an already enabled code does nothing.
    ///
    /// No rate is required; conversions involving a rate-less code fail
    /// with [`Error::RateNotFound`].
    pub fn enable_currency(&mut self, currency: impl Into<CurrencyCode>) {
        let currency = currency.into();
        if self.is_currency_enabled(&currency) {
            trace!(currency = %currency, "already enabled");
            return;
        }
        debug!(currency = %currency, "enable");
        self.enabled.push(currency);
    }

    /// Sweep the whole balance of `currency` into `target`, then disable
    /// `currency`.
    ///
    /// Succeeds without effect if `currency` is already disabled. `target`
    /// must be enabled and different from `currency`, and both need rates.
    pub fn disable_currency(&mut self, currency: &str, target: &str) -> Result<()> {
        if !self.is_currency_enabled(currency) {
            trace!(currency, "already disabled");
            return Ok(());
        }
        ensure!(
            currency != target && self.is_currency_enabled(target),
            Error::TargetCurrencyDisabled(target.to_owned())
        );
        let amount = self.balance_of(currency);
        let converted = self.rates.convert(amount, currency, target)?;

        // Nothing below can fail.
        let target_balance = self.credit(converted, target);
        self.balances.insert(CurrencyCode::from(currency), 0.0);
        self.enabled.retain(|code| code != currency);
        info!(
            currency,
            into = target,
            amount,
            converted,
            target_balance,
            "disabled currency"
        );
        Ok(())
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Enabled codes: construction order, later enables appended, disabled
    /// codes removed.
    pub fn get_enabled_currencies(&self) -> &[CurrencyCode] {
        &self.enabled
    }

    /// Whether `currency` is currently enabled.
    pub fn is_currency_enabled(&self, currency: &str) -> bool {
        self.enabled.iter().any(|code| code == currency)
    }

    /// The rate table the ledger was built with.
    pub fn rates(&self) -> &ExchangeRateTable {
        &self.rates
    }

    /// One entry per enabled currency that has a balance, in enabled order.
    pub fn holdings(&self) -> Vec<Money> {
        self.enabled
            .iter()
            .filter_map(|code| self.balances.get(code).map(|&v| Money::new(v, code)))
            .collect()
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn check_enabled(&self, currency: &str) -> Result<()> {
        ensure!(
            self.is_currency_enabled(currency),
            Error::CurrencyDisabled(currency.to_owned())
        );
        Ok(())
    }

    fn balance_of(&self, currency: &str) -> Amount {
        self.balances.get(currency).copied().unwrap_or(0.0)
    }

    fn credit(&mut self, amount: Amount, currency: &str) -> Amount {
        let balance = self
            .balances
            .entry(CurrencyCode::from(currency))
            .or_insert(0.0);
        *balance += amount;
        *balance
    }
}

impl From<ExchangeRateTable> for Ledger {
    fn from(rates: ExchangeRateTable) -> Self {
        Self::new(rates)
    }
}
