//! End-to-end ledger scenarios.
//!
//! The walkthrough below funds three currencies, reports totals, and finally
//! sweeps two of them into the third. Rate tables built after the ledger
//! exists are never seen by it.

use approx::assert_relative_eq;
use fxl_core::Error;
use fxl_currencies::ExchangeRateTable;
use fxl_ledger::Ledger;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn rates(pairs: [(&str, f64); 3]) -> ExchangeRateTable {
    ExchangeRateTable::from_pairs(pairs).unwrap()
}

fn enabled(l: &Ledger) -> Vec<&str> {
    l.get_enabled_currencies()
        .iter()
        .map(|c| c.as_str())
        .collect()
}

#[test]
fn walkthrough_with_frozen_rates() {
    init_tracing();
    let mut ledger = Ledger::new(rates([("USD", 0.014), ("EUR", 0.0125), ("RUB", 1.0)]));

    ledger.deposit(40.0, "USD").unwrap();
    ledger.deposit(50.0, "EUR").unwrap();
    ledger.deposit(7500.0, "RUB").unwrap();

    let rub = 40.0 / 0.014 + 50.0 / 0.0125 + 7500.0;
    assert_relative_eq!(
        ledger.get_total_balance_in_currency("RUB").unwrap(),
        rub,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        ledger.get_total_balance_in_currency("USD").unwrap(),
        rub * 0.014,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        ledger.get_total_balance_in_currency("EUR").unwrap(),
        rub * 0.0125,
        max_relative = 1e-12
    );

    ledger.deposit(1000.0, "RUB").unwrap();
    ledger.deposit(50.0, "EUR").unwrap();
    ledger.withdraw(10.0, "USD").unwrap();

    // A fresh table has no effect on an existing ledger.
    let _later = rates([("USD", 0.01), ("EUR", 0.0066), ("RUB", 1.0)]);
    assert_relative_eq!(
        ledger.get_total_balance_in_currency("RUB").unwrap(),
        30.0 / 0.014 + 100.0 / 0.0125 + 8500.0,
        max_relative = 1e-12
    );

    let _later = rates([("USD", 0.66), ("EUR", 1.0), ("RUB", 150.0)]);
    ledger.withdraw(1000.0, "RUB").unwrap();
    ledger.deposit(0.0, "EUR").unwrap();

    let _later = rates([("USD", 0.83), ("EUR", 1.0), ("RUB", 120.0)]);
    assert_relative_eq!(
        ledger.get_total_balance_in_currency("EUR").unwrap(),
        30.0 / 0.014 * 0.0125 + 100.0 + 7500.0 * 0.0125,
        max_relative = 1e-12
    );

    let _later = rates([("USD", 100.0), ("EUR", 120.0), ("RUB", 1.0)]);
    ledger.disable_currency("EUR", "RUB").unwrap();
    ledger.disable_currency("USD", "RUB").unwrap();

    assert_eq!(enabled(&ledger), ["RUB"]);
    let expected = 7500.0 + 100.0 / 0.0125 + 30.0 / 0.014;
    assert_relative_eq!(
        ledger.get_total_balance_in_currency("RUB").unwrap(),
        expected,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        ledger.get_balance("RUB").unwrap(),
        expected,
        max_relative = 1e-12
    );
    assert_eq!(ledger.rates().get("USD"), Some(0.014));
}

#[test]
fn disable_sweeps_forty_dollars() {
    init_tracing();
    let mut ledger = Ledger::new(rates([("USD", 0.014), ("EUR", 0.0125), ("RUB", 1.0)]));
    ledger.deposit(40.0, "USD").unwrap();
    let rub_before = ledger.get_balance("RUB").unwrap();

    ledger.disable_currency("USD", "RUB").unwrap();

    let rub_after = ledger.get_balance("RUB").unwrap();
    assert_relative_eq!(rub_after - rub_before, 2857.142857, epsilon = 1e-6);
    assert!(!ledger.is_currency_enabled("USD"));
    assert_eq!(
        ledger.get_balance("USD"),
        Err(Error::CurrencyDisabled("USD".into()))
    );

    ledger.enable_currency("USD");
    assert_eq!(ledger.get_balance("USD"), Ok(0.0));
}

#[test]
fn disabled_currency_is_skipped_by_totals() {
    let mut ledger = Ledger::new(rates([("USD", 0.014), ("EUR", 0.0125), ("RUB", 1.0)]));
    ledger.deposit(50.0, "EUR").unwrap();
    ledger.deposit(100.0, "RUB").unwrap();
    ledger.disable_currency("EUR", "RUB").unwrap();
    ledger.enable_currency("EUR");
    ledger.disable_currency("USD", "EUR").unwrap();

    assert_eq!(enabled(&ledger), ["RUB", "EUR"]);
    assert_relative_eq!(
        ledger.get_total_balance_in_currency("RUB").unwrap(),
        100.0 + 50.0 / 0.0125,
        max_relative = 1e-12
    );
}

#[test]
fn failed_operations_change_nothing() {
    let mut ledger = Ledger::new(rates([("USD", 0.014), ("EUR", 0.0125), ("RUB", 1.0)]));
    ledger.deposit(40.0, "USD").unwrap();
    ledger.enable_currency("XAU");
    ledger.deposit(2.0, "XAU").unwrap();
    let before = ledger.holdings();

    assert_eq!(
        ledger.disable_currency("XAU", "USD"),
        Err(Error::RateNotFound("XAU".into()))
    );
    assert_eq!(
        ledger.disable_currency("USD", "XAU"),
        Err(Error::RateNotFound("XAU".into()))
    );
    assert_eq!(
        ledger.disable_currency("USD", "GBP"),
        Err(Error::TargetCurrencyDisabled("GBP".into()))
    );
    assert!(ledger.withdraw(41.0, "USD").is_err());
    assert!(ledger.deposit(1.0, "GBP").is_err());

    assert_eq!(ledger.holdings(), before);
    assert_eq!(enabled(&ledger), ["USD", "EUR", "RUB", "XAU"]);
}
