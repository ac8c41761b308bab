//! Exchange-rate table and currency conversion.
//!
//! Every rate is quoted against one implicit base unit: `rate[c]` is how many
//! base units one unit of `c` is worth. Converting between any two listed
//! currencies pivots through that base, so no cross rates are stored.

use crate::currency::CurrencyCode;
use fxl_core::{
    ensure,
    errors::{Error, Result},
    Amount, Rate,
};
use std::collections::HashMap;

/// An insertion-ordered mapping from currency code to a positive rate.
///
/// Iteration (and therefore the initial enabled set of a ledger built from
/// the table) follows the order in which codes were first inserted.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRateTable {
    entries: Vec<(CurrencyCode, Rate)>,
    index: HashMap<CurrencyCode, usize>,
}

impl ExchangeRateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(code, rate)` pairs, stopping at the first
    /// invalid rate.
    pub fn from_pairs<C, I>(pairs: I) -> Result<Self>
    where
        C: Into<CurrencyCode>,
        I: IntoIterator<Item = (C, Rate)>,
    {
        let mut table = Self::new();
        for (code, rate) in pairs {
            table.insert(code, rate)?;
        }
        Ok(table)
    }

    /// Insert or replace the rate for `code`.
    ///
    /// A replaced code keeps its original position. Fails with
    /// [`Error::InvalidRate`] unless `rate` is finite and strictly positive.
    pub fn insert(&mut self, code: impl Into<CurrencyCode>, rate: Rate) -> Result<()> {
        let code = code.into();
        ensure!(
            rate.is_finite() && rate > 0.0,
            Error::InvalidRate {
                currency: code.into_inner(),
                rate,
            }
        );
        match self.index.get(&code) {
            Some(&i) => self.entries[i].1 = rate,
            None => {
                self.index.insert(code.clone(), self.entries.len());
                self.entries.push((code, rate));
            }
        }
        Ok(())
    }

    /// The rate for `code`, if listed.
    pub fn get(&self, code: &str) -> Option<Rate> {
        self.index.get(code).map(|&i| self.entries[i].1)
    }

    /// The rate for `code`, or [`Error::RateNotFound`].
    pub fn rate(&self, code: &str) -> Result<Rate> {
        self.get(code)
            .ok_or_else(|| Error::RateNotFound(code.to_owned()))
    }

    /// Whether `code` has a rate.
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Convert `amount` of `from` into `to` through the implicit base.
    ///
    /// Plain `f64` arithmetic, no rounding. `from` is looked up first.
    pub fn convert(&self, amount: Amount, from: &str, to: &str) -> Result<Amount> {
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        let base = amount / from_rate;
        Ok(base * to_rate)
    }

    /// Listed codes in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> + '_ {
        self.entries.iter().map(|(code, _)| code)
    }

    /// `(code, rate)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, Rate)> + '_ {
        self.entries.iter().map(|(code, rate)| (code, *rate))
    }

    /// Number of listed currencies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for ExchangeRateTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::ExchangeRateTable;
    use crate::currency::CurrencyCode;
    use fxl_core::Rate;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for ExchangeRateTable {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (code, rate) in self.iter() {
                map.serialize_entry(code, &rate)?;
            }
            map.end()
        }
    }

    struct TableVisitor;

    impl<'de> Visitor<'de> for TableVisitor {
        type Value = ExchangeRateTable;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from currency code to a positive exchange rate")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut table = ExchangeRateTable::new();
            while let Some((code, rate)) = access.next_entry::<CurrencyCode, Rate>()? {
                table.insert(code, rate).map_err(de::Error::custom)?;
            }
            Ok(table)
        }
    }

    impl<'de> Deserialize<'de> for ExchangeRateTable {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(TableVisitor)
        }
    }
}
