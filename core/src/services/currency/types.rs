//! Rate table types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exchange rates relative to a fixed base currency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    /// Code of the base currency the rates are quoted against
    pub base: String,

    /// Units of each currency per one unit of the base currency
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(base: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        Self {
            base: base.into(),
            rates,
        }
    }

    /// Rate for a currency code
    ///
    /// The base currency always converts at 1.0, even when the endpoint
    /// omits it from the table.
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        if code.eq_ignore_ascii_case(&self.base) {
            return Some(1.0);
        }
        self.rates
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|(_, rate)| *rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_lookup() {
        let mut rates = HashMap::new();
        rates.insert("USD".to_string(), 0.74);
        let table = RateTable::new("CAD", rates);

        assert_eq!(table.rate_for("USD"), Some(0.74));
        assert_eq!(table.rate_for("usd"), Some(0.74));
        assert_eq!(table.rate_for("CAD"), Some(1.0));
        assert_eq!(table.rate_for("XYZ"), None);
    }
}
