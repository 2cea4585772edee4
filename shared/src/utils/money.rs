//! Price string utilities
//!
//! Stored listing prices are decimal strings in the base currency. These
//! helpers parse them leniently and format converted amounts for display.

use once_cell::sync::Lazy;
use regex::Regex;

// Plain non-negative decimal, optional fraction part
static DECIMAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").unwrap());

/// Strip formatting characters commonly found in user-entered prices
pub fn normalize_price(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Check whether a raw price string is a well-formed decimal
pub fn is_decimal_string(raw: &str) -> bool {
    DECIMAL_REGEX.is_match(&normalize_price(raw))
}

/// Parse a stored price string into an amount
///
/// Returns `None` when the string is not a plain decimal after
/// normalization (e.g. "contact landlord").
pub fn parse_price(raw: &str) -> Option<f64> {
    let normalized = normalize_price(raw);
    if !DECIMAL_REGEX.is_match(&normalized) {
        return None;
    }
    normalized.parse::<f64>().ok()
}

/// Group an integral amount with thousands separators (1620 -> "1,620")
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_price() {
        assert_eq!(parse_price("1200"), Some(1200.0));
        assert_eq!(parse_price("1850.50"), Some(1850.5));
    }

    #[test]
    fn test_parse_formatted_price() {
        assert_eq!(parse_price("$1,200"), Some(1200.0));
        assert_eq!(parse_price(" 950 "), Some(950.0));
    }

    #[test]
    fn test_parse_invalid_price() {
        assert_eq!(parse_price("contact landlord"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("12.34.56"), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(950), "950");
        assert_eq!(group_thousands(1620), "1,620");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
