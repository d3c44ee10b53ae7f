//! Exchange rates normalized to a single base currency.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{RecordId, Timestamp};

/// Reference currency; every stored rate is expressed relative to it.
pub const BASE_CURRENCY: &str = "USD";

/// Rates loaded into a fresh store, and returned when the store is unreachable.
pub const SEED_RATES: [(&str, f64); 9] = [
    ("USD", 1.0),
    ("BRL", 5.19),
    ("EUR", 0.92),
    ("GBP", 0.8),
    ("JPY", 150.23),
    ("CAD", 1.36),
    ("AUD", 1.52),
    ("CHF", 0.89),
    ("CNY", 7.22),
];

/// Stored rate of one currency against [`BASE_CURRENCY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub id: RecordId,
    pub currency_code: String,
    pub rate: f64,
    pub last_updated: Timestamp,
}

/// Currency code to rate mapping used for cross-rate computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable(BTreeMap<String, f64>);

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed table served when rates cannot be read from the store.
    pub fn fallback() -> Self {
        SEED_RATES
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect()
    }

    pub fn insert(&mut self, code: impl Into<String>, rate: f64) {
        self.0.insert(code.into(), rate);
    }

    /// Rate for `code`; zero or negative rates are treated as absent.
    pub fn get(&self, code: &str) -> Option<f64> {
        self.0.get(code).copied().filter(|rate| *rate > 0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a ExchangeRate> for RateTable {
    fn from_iter<I: IntoIterator<Item = &'a ExchangeRate>>(iter: I) -> Self {
        iter.into_iter()
            .map(|r| (r.currency_code.clone(), r.rate))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_matches_seed_exactly() {
        let table = RateTable::fallback();
        assert_eq!(table.len(), 9);
        for (code, rate) in SEED_RATES {
            assert_eq!(table.get(code), Some(rate));
        }
    }

    #[test]
    fn base_currency_is_one() {
        assert_eq!(RateTable::fallback().get(BASE_CURRENCY), Some(1.0));
    }

    #[test]
    fn non_positive_rates_are_absent() {
        let mut table = RateTable::new();
        table.insert("XXX", 0.0);
        assert_eq!(table.get("XXX"), None);
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut table = RateTable::new();
        table.insert("USD", 1.0);
        table.insert("BRL", 5.19);
        assert_eq!(
            serde_json::to_string(&table).unwrap(),
            r#"{"BRL":5.19,"USD":1.0}"#
        );
    }

    #[test]
    fn builds_from_stored_rates() {
        let stored = vec![ExchangeRate {
            id: RecordId::new(1),
            currency_code: "EUR".to_string(),
            rate: 0.92,
            last_updated: Timestamp::now(),
        }];
        let table: RateTable = stored.iter().collect();
        assert_eq!(table.get("EUR"), Some(0.92));
    }
}
