//! Display currency catalog.

use rn_shared::utils::money;
use serde::{Deserialize, Serialize};

/// Currency code all stored prices are expressed in
pub const BASE_CURRENCY: &str = "CAD";

/// A currency the user can price listings in
///
/// `rate` is the multiplier from the base currency and defaults to 1.0
/// until a live rate table is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyOption {
    /// ISO 4217 code
    pub code: String,

    /// Display symbol
    pub symbol: String,

    /// Flag glyph shown in the currency picker
    pub flag: String,

    /// Units of this currency per one unit of the base currency
    pub rate: f64,
}

impl CurrencyOption {
    pub fn new(code: &str, symbol: &str, flag: &str) -> Self {
        Self {
            code: code.to_string(),
            symbol: symbol.to_string(),
            flag: flag.to_string(),
            rate: 1.0,
        }
    }

    /// Replace the rate with a live value
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Format an amount in this currency, zero decimal places
    pub fn format_amount(&self, amount: f64) -> String {
        let rounded = amount.round().max(0.0) as u64;
        format!("{}{}", self.symbol, money::group_thousands(rounded))
    }
}

/// Currencies offered in the picker, base currency first
pub fn catalog() -> Vec<CurrencyOption> {
    vec![
        CurrencyOption::new("CAD", "$", "\u{1F1E8}\u{1F1E6}"),
        CurrencyOption::new("USD", "$", "\u{1F1FA}\u{1F1F8}"),
        CurrencyOption::new("EUR", "\u{20AC}", "\u{1F1EA}\u{1F1FA}"),
        CurrencyOption::new("GBP", "\u{A3}", "\u{1F1EC}\u{1F1E7}"),
        CurrencyOption::new("INR", "\u{20B9}", "\u{1F1EE}\u{1F1F3}"),
        CurrencyOption::new("CNY", "\u{A5}", "\u{1F1E8}\u{1F1F3}"),
        CurrencyOption::new("JPY", "\u{A5}", "\u{1F1EF}\u{1F1F5}"),
        CurrencyOption::new("AUD", "$", "\u{1F1E6}\u{1F1FA}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_starts_with_base() {
        let options = catalog();
        assert_eq!(options[0].code, BASE_CURRENCY);
        assert!(options.iter().all(|o| o.rate == 1.0));
    }

    #[test]
    fn test_format_amount() {
        let cad = CurrencyOption::new("CAD", "$", "");
        assert_eq!(cad.format_amount(1620.0), "$1,620");
        assert_eq!(cad.format_amount(949.6), "$950");

        let eur = CurrencyOption::new("EUR", "\u{20AC}", "");
        assert_eq!(eur.format_amount(0.0), "\u{20AC}0");
    }
}
