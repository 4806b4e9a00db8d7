//! Validated checkout request.

use common::{Amount, AmountError};
use serde_json::Value;

use crate::error::CheckoutError;

/// One checkout call's input, immutable once accepted.
///
/// Construction through [`CheckoutRequest::from_parts`] is the
/// validation gate: a request that exists is well-formed, so the saga
/// never contacts a collaborator on behalf of malformed input. The
/// payment method is deliberately passed through unvalidated; whether it
/// is usable is the gateway's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub item: String,
    pub quantity: u64,
    pub amount: Amount,
    pub method: String,
}

impl CheckoutRequest {
    /// Builds a request from loosely-typed wire fields.
    ///
    /// Quantity accepts a positive JSON integer or a numeric string;
    /// amount accepts a positive JSON number or numeric string. Any
    /// failure is `invalid_request` with the same message a client of
    /// the original wire contract would see.
    pub fn from_parts(
        item: Option<String>,
        quantity: Option<Value>,
        amount: Option<Value>,
        method: Option<String>,
    ) -> Result<Self, CheckoutError> {
        let item = item.unwrap_or_default();
        let quantity = quantity.as_ref().and_then(parse_quantity).unwrap_or(0);
        if item.is_empty() || quantity == 0 {
            return Err(CheckoutError::InvalidRequest(
                "item and positive quantity required".to_string(),
            ));
        }

        let amount = Amount::from_value(amount.as_ref()).map_err(|e| match e {
            AmountError::NotNumeric => {
                CheckoutError::InvalidRequest("amount must be numeric".to_string())
            }
            AmountError::NotPositive => {
                CheckoutError::InvalidRequest("amount must be > 0".to_string())
            }
        })?;

        Ok(Self {
            item,
            quantity,
            amount,
            method: method.unwrap_or_default(),
        })
    }
}

fn parse_quantity(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parts(
        item: &str,
        quantity: Value,
        amount: Value,
        method: &str,
    ) -> Result<CheckoutRequest, CheckoutError> {
        CheckoutRequest::from_parts(
            Some(item.to_string()),
            Some(quantity),
            Some(amount),
            Some(method.to_string()),
        )
    }

    #[test]
    fn accepts_a_well_formed_request() {
        let request = parts("widget", json!(3), json!(30), "credit_card").unwrap();
        assert_eq!(request.item, "widget");
        assert_eq!(request.quantity, 3);
        assert_eq!(request.amount.value(), 30.0);
        assert_eq!(request.method, "credit_card");
    }

    #[test]
    fn accepts_numeric_strings() {
        let request = parts("widget", json!("3"), json!("29.99"), "paypal").unwrap();
        assert_eq!(request.quantity, 3);
        assert_eq!(request.amount.value(), 29.99);
    }

    #[test]
    fn rejects_missing_or_empty_item() {
        for item in [None, Some(String::new())] {
            let err = CheckoutRequest::from_parts(
                item,
                Some(json!(3)),
                Some(json!(30)),
                Some("credit_card".to_string()),
            )
            .unwrap_err();
            assert_eq!(err.code(), "invalid_request");
            assert_eq!(err.to_string(), "item and positive quantity required");
        }
    }

    #[test]
    fn rejects_non_positive_or_non_integer_quantity() {
        for quantity in [json!(0), json!(-3), json!(2.5), json!("abc")] {
            let err = parts("widget", quantity, json!(30), "credit_card").unwrap_err();
            assert_eq!(err.code(), "invalid_request");
        }
    }

    #[test]
    fn rejects_bad_amounts() {
        let err = parts("widget", json!(3), json!("abc"), "credit_card").unwrap_err();
        assert_eq!(err.to_string(), "amount must be numeric");

        let err = parts("widget", json!(3), json!(0), "credit_card").unwrap_err();
        assert_eq!(err.to_string(), "amount must be > 0");

        let err = parts("widget", json!(3), json!(-5), "credit_card").unwrap_err();
        assert_eq!(err.to_string(), "amount must be > 0");
    }

    #[test]
    fn missing_method_passes_through_empty() {
        let request =
            CheckoutRequest::from_parts(Some("widget".into()), Some(json!(1)), Some(json!(1)), None)
                .unwrap();
        assert_eq!(request.method, "");
    }
}
