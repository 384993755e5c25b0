//! Price text parsing
//!
//! The site renders money as `$D.CC`, sometimes behind a label
//! (`Item total: $39.98`). Prices are handled as integer cents so
//! checkout arithmetic compares exactly.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid price text: {0:?}")]
pub struct ParsePriceError(pub String);

/// Parse the amount after the last `$` into cents.
pub fn parse_price_cents(text: &str) -> Result<u32, ParsePriceError> {
    let bad = || ParsePriceError(text.to_string());

    let (_, amount) = text.rsplit_once('$').ok_or_else(bad)?;
    let amount = amount.trim();
    let (dollars, cents) = amount.split_once('.').ok_or_else(bad)?;
    if cents.len() != 2 {
        return Err(bad());
    }

    let dollars: u32 = dollars.parse().map_err(|_| bad())?;
    let cents: u32 = cents.parse().map_err(|_| bad())?;
    Ok(dollars * 100 + cents)
}

pub fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("$29.99", 2999 ; "bare price")]
    #[test_case("Item total: $39.98", 3998 ; "labeled subtotal")]
    #[test_case("Tax: $3.20", 320 ; "labeled tax")]
    #[test_case("$0.99", 99 ; "under a dollar")]
    fn parses_rendered_prices(text: &str, cents: u32) {
        assert_eq!(parse_price_cents(text), Ok(cents));
    }

    #[test_case("" ; "empty")]
    #[test_case("29.99" ; "missing dollar sign")]
    #[test_case("$29" ; "missing cents")]
    #[test_case("$29.9" ; "one cent digit")]
    #[test_case("$twenty.99" ; "non numeric dollars")]
    fn rejects_malformed_prices(text: &str) {
        assert!(parse_price_cents(text).is_err());
    }

    #[test]
    fn formats_back_to_site_form() {
        assert_eq!(format_cents(2999), "$29.99");
        assert_eq!(format_cents(305), "$3.05");
        assert_eq!(format_cents(0), "$0.00");
    }
}
