use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A positive monetary amount.
///
/// Wraps the raw number carried on the wire and enforces at construction
/// that it is finite and strictly positive. Display follows the gateway's
/// convention: integral amounts print without a decimal part (`30`, not
/// `30.0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

/// Errors from constructing an [`Amount`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount must be numeric")]
    NotNumeric,

    #[error("amount must be > 0")]
    NotPositive,
}

impl Amount {
    /// Creates an amount from a raw number, rejecting non-finite and
    /// non-positive values.
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotNumeric);
        }
        if value <= 0.0 {
            return Err(AmountError::NotPositive);
        }
        Ok(Self(value))
    }

    /// Parses an amount from a string, with the same validity rules.
    pub fn parse(raw: &str) -> Result<Self, AmountError> {
        let value: f64 = raw.trim().parse().map_err(|_| AmountError::NotNumeric)?;
        Self::new(value)
    }

    /// Extracts an amount from a loose JSON value: a number or a
    /// numeric string. Anything else is non-numeric.
    pub fn from_value(value: Option<&serde_json::Value>) -> Result<Self, AmountError> {
        match value {
            Some(serde_json::Value::Number(n)) => {
                Self::new(n.as_f64().ok_or(AmountError::NotNumeric)?)
            }
            Some(serde_json::Value::String(s)) => Self::parse(s),
            _ => Err(AmountError::NotNumeric),
        }
    }

    /// Returns the raw numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Formats a payment method identifier for display:
/// underscores become spaces and each word is title-cased,
/// so `credit_card` becomes `Credit Card`.
pub fn method_display_name(method: &str) -> String {
    method
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_rejects_zero_and_negative() {
        assert_eq!(Amount::new(0.0), Err(AmountError::NotPositive));
        assert_eq!(Amount::new(-5.0), Err(AmountError::NotPositive));
        assert!(Amount::new(0.01).is_ok());
    }

    #[test]
    fn amount_rejects_non_finite() {
        assert_eq!(Amount::new(f64::NAN), Err(AmountError::NotNumeric));
        assert_eq!(Amount::new(f64::INFINITY), Err(AmountError::NotNumeric));
    }

    #[test]
    fn amount_parse_accepts_numeric_strings() {
        assert_eq!(Amount::parse("30").unwrap().value(), 30.0);
        assert_eq!(Amount::parse(" 29.99 ").unwrap().value(), 29.99);
        assert_eq!(Amount::parse("abc"), Err(AmountError::NotNumeric));
        assert_eq!(Amount::parse("-1"), Err(AmountError::NotPositive));
    }

    #[test]
    fn from_value_accepts_numbers_and_numeric_strings() {
        use serde_json::json;
        assert_eq!(Amount::from_value(Some(&json!(30))).unwrap().value(), 30.0);
        assert_eq!(
            Amount::from_value(Some(&json!("29.99"))).unwrap().value(),
            29.99
        );
        assert_eq!(
            Amount::from_value(Some(&json!(null))),
            Err(AmountError::NotNumeric)
        );
        assert_eq!(Amount::from_value(None), Err(AmountError::NotNumeric));
        assert_eq!(
            Amount::from_value(Some(&json!(0))),
            Err(AmountError::NotPositive)
        );
    }

    #[test]
    fn integral_amounts_display_without_decimal() {
        assert_eq!(Amount::new(30.0).unwrap().to_string(), "30");
        assert_eq!(Amount::new(29.99).unwrap().to_string(), "29.99");
    }

    #[test]
    fn amount_serialization_is_transparent() {
        let amount = Amount::new(42.5).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "42.5");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }

    #[test]
    fn method_names_are_title_cased() {
        assert_eq!(method_display_name("credit_card"), "Credit Card");
        assert_eq!(method_display_name("paypal"), "Paypal");
        assert_eq!(method_display_name("BANK_TRANSFER"), "Bank Transfer");
    }
}
