//! Static exchange-rate table
//!
//! Stores the bundled currency->currency rate matrix and answers lookup
//! queries. The table is immutable once built and is shared into the
//! controller behind an `Arc`.

use crate::currency::Currency;
use crate::error::{ConverterError, Result};
use hashbrown::HashMap;

/// Immutable matrix of conversion rates keyed by ordered currency pair.
///
/// Lookup never fails: a currency converted to itself, or a pair with no
/// configured entry, resolves to `1.0`. The fallback is documented behavior,
/// not an error.
///
/// The matrix is hand-specified and is not required to be symmetric or
/// reciprocal; `rate(A, B) * rate(B, A)` may differ from `1.0`.
///
/// # Example
/// ```
/// use ratesync::rates::RateTable;
/// use ratesync::currency::Currency;
///
/// let table = RateTable::builtin();
/// assert_eq!(table.lookup(Currency::USD, Currency::EUR), 0.9261);
/// assert_eq!(table.lookup(Currency::USD, Currency::USD), 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<(Currency, Currency), f64>,
}

impl RateTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// The bundled rate matrix
    ///
    /// Constants match the shipped data exactly, rounding quirks included.
    pub fn builtin() -> Self {
        use Currency::*;

        let mut table = Self::new();
        let entries = [
            (USD, EUR, 0.9261),
            (USD, JPY, 110.0),
            (USD, VND, 24000.0),
            (USD, GBP, 0.75),
            (EUR, USD, 1.08),
            (EUR, JPY, 119.0),
            (EUR, VND, 26000.0),
            (EUR, GBP, 0.81),
            (JPY, USD, 0.0091),
            (JPY, EUR, 0.0084),
            (JPY, VND, 218.0),
            (JPY, GBP, 0.0068),
            (VND, USD, 0.000042),
            (VND, EUR, 0.000038),
            (VND, JPY, 0.0046),
            (VND, GBP, 0.000031),
            (GBP, USD, 1.33),
            (GBP, EUR, 1.23),
            (GBP, JPY, 147.0),
            (GBP, VND, 32000.0),
        ];

        for (from, to, rate) in entries {
            // Built-in constants are all positive; insert cannot fail here.
            let _ = table.insert(from, to, rate);
        }

        table
    }

    /// Add a rate entry
    ///
    /// Rejects non-positive rates. Intended for construction time only; the
    /// table is not meant to change once the controller holds it.
    pub fn insert(&mut self, from: Currency, to: Currency, rate: f64) -> Result<()> {
        if rate <= 0.0 {
            return Err(ConverterError::InvalidRate(rate));
        }

        self.rates.insert((from, to), rate);
        Ok(())
    }

    /// Look up the conversion rate from one currency to another
    ///
    /// Returns `1.0` when `from == to` or when the pair has no entry.
    pub fn lookup(&self, from: Currency, to: Currency) -> f64 {
        if from == to {
            return 1.0;
        }

        self.rates.get(&(from, to)).copied().unwrap_or(1.0)
    }

    /// Check whether a pair has an explicit entry
    pub fn has_rate(&self, from: Currency, to: Currency) -> bool {
        self.rates.contains_key(&(from, to))
    }

    /// Number of configured pair entries
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True when no pairs are configured
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_constants() {
        let table = RateTable::builtin();

        assert_eq!(table.lookup(Currency::USD, Currency::EUR), 0.9261);
        assert_eq!(table.lookup(Currency::USD, Currency::VND), 24000.0);
        assert_eq!(table.lookup(Currency::EUR, Currency::USD), 1.08);
        assert_eq!(table.lookup(Currency::JPY, Currency::GBP), 0.0068);
        assert_eq!(table.lookup(Currency::VND, Currency::GBP), 0.000031);
        assert_eq!(table.lookup(Currency::GBP, Currency::VND), 32000.0);
    }

    #[test]
    fn test_builtin_covers_all_ordered_pairs() {
        let table = RateTable::builtin();
        assert_eq!(table.len(), 20);

        for from in Currency::all() {
            for to in Currency::all() {
                if from != to {
                    assert!(table.has_rate(from, to), "missing {}/{}", from, to);
                }
            }
        }
    }

    #[test]
    fn test_same_currency_is_unity() {
        let table = RateTable::builtin();

        for currency in Currency::all() {
            assert_eq!(table.lookup(currency, currency), 1.0);
        }
    }

    #[test]
    fn test_missing_pair_falls_back_to_unity() {
        let table = RateTable::new();

        assert_eq!(table.lookup(Currency::USD, Currency::EUR), 1.0);
        assert!(!table.has_rate(Currency::USD, Currency::EUR));
    }

    #[test]
    fn test_table_is_not_reciprocal() {
        let table = RateTable::builtin();

        // Hand-specified data: USD->EUR and EUR->USD do not invert exactly.
        let product =
            table.lookup(Currency::USD, Currency::EUR) * table.lookup(Currency::EUR, Currency::USD);
        assert!(product != 1.0);
    }

    #[test]
    fn test_insert_rejects_non_positive() {
        let mut table = RateTable::new();

        assert!(table.insert(Currency::USD, Currency::EUR, 0.0).is_err());
        assert!(table.insert(Currency::USD, Currency::EUR, -1.2).is_err());
        assert!(table.is_empty());

        assert!(table.insert(Currency::USD, Currency::EUR, 0.9261).is_ok());
        assert_eq!(table.len(), 1);
    }
}
