//! Payment list shaping.
//!
//! The wallet backend expects payments as
//! `{"address": "...", "amount": {"quantity": n, "unit": "lovelace"}}`.
//! Callers may instead pass the shorthand `[{"addr1": 1000000}, ...]`, which
//! is expanded here before the request is built.

use serde_json::{Map, Value, json};

use super::error::{EXPECTED_ARRAY, EXPECTED_MAP, EXPECTED_SINGLE_ENTRY_MAPS, Result, WalletError};

/// Unit used for every shorthand amount.
pub const LOVELACE: &str = "lovelace";

// ============================================================================
// Argument Guards
// ============================================================================

/// Fail with `InvalidArgument` unless `param` is a JSON object.
pub fn verify_param_is_map(param: &Value) -> Result<&Map<String, Value>> {
    param
        .as_object()
        .ok_or_else(|| WalletError::invalid_argument(EXPECTED_MAP))
}

/// Fail with `InvalidArgument` unless `param` is a JSON array.
pub fn verify_param_is_array(param: &Value) -> Result<&Vec<Value>> {
    param
        .as_array()
        .ok_or_else(|| WalletError::invalid_argument(EXPECTED_ARRAY))
}

// ============================================================================
// Payments
// ============================================================================

/// Expand shorthand payments into the backend's payment objects.
///
/// Order is preserved. Every element must be an object with exactly one
/// entry whose value is integer-coercible.
///
/// # Errors
///
/// Returns `WalletError::InvalidArgument` if `payments` is not an array, if
/// an element is not a single-entry object, or if an amount is not a number.
pub fn format_payments(payments: &Value) -> Result<Value> {
    let entries = verify_param_is_array(payments)?;

    let formatted = entries
        .iter()
        .map(|payment| {
            let (address, amount) = single_entry(payment)
                .ok_or_else(|| WalletError::invalid_argument(EXPECTED_SINGLE_ENTRY_MAPS))?;
            let quantity = coerce_quantity(amount).ok_or_else(|| {
                WalletError::invalid_argument(format!(
                    "amount for '{address}' should be an integer, got {amount}"
                ))
            })?;

            Ok(json!({
                "address": address,
                "amount": { "quantity": quantity, "unit": LOVELACE }
            }))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Value::Array(formatted))
}

/// Accept either payment representation.
///
/// A list where any element already carries an `address` key is forwarded
/// unchanged (this is how callers attach assets); anything else goes through
/// [`format_payments`].
///
/// # Errors
///
/// Returns `WalletError::InvalidArgument` if `payments` is not an array or
/// the shorthand form is malformed.
pub fn normalize_payments(payments: &Value) -> Result<Value> {
    let entries = verify_param_is_array(payments)?;

    if entries.iter().any(|p| p.get("address").is_some()) {
        return Ok(payments.clone());
    }

    format_payments(payments)
}

fn single_entry(payment: &Value) -> Option<(&String, &Value)> {
    let map = payment.as_object()?;
    if map.len() != 1 {
        return None;
    }
    map.iter().next()
}

fn coerce_quantity(amount: &Value) -> Option<Value> {
    match amount {
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(Value::Number(n.clone())),
        Value::Number(n) => n.as_f64().and_then(truncate),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .map(Value::from)
                .or_else(|_| s.parse::<i64>().map(Value::from))
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    }
}

/// Fractions are truncated toward zero. Values that do not fit a 64-bit
/// integer are rejected rather than saturated.
fn truncate(f: f64) -> Option<Value> {
    // 2^64 and -2^63 are exact in f64.
    const U64_END: f64 = 18_446_744_073_709_551_616.0;
    const I64_START: f64 = -9_223_372_036_854_775_808.0;

    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    if (0.0..U64_END).contains(&t) {
        Some(Value::from(t as u64))
    } else if (I64_START..0.0).contains(&t) {
        Some(Value::from(t as i64))
    } else {
        None
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_format_payments_expands_in_order() {
        let payments = format_payments(&json!([{ "a1": 1 }, { "a2": 2 }])).unwrap();
        assert_eq!(
            payments,
            json!([
                { "address": "a1", "amount": { "quantity": 1, "unit": "lovelace" } },
                { "address": "a2", "amount": { "quantity": 2, "unit": "lovelace" } }
            ])
        );
    }

    #[test]
    fn test_format_payments_single() {
        let payments = format_payments(&json!([{ "a1": 1 }])).unwrap();
        assert_eq!(
            payments,
            json!([{ "address": "a1", "amount": { "quantity": 1, "unit": "lovelace" } }])
        );
    }

    #[test]
    fn test_format_payments_empty_list() {
        assert_eq!(format_payments(&json!([])).unwrap(), json!([]));
    }

    #[rstest]
    #[case::string(json!("BadArg"))]
    #[case::object(json!({ "a1": 1 }))]
    #[case::number(json!(42))]
    fn test_format_payments_rejects_non_sequence(#[case] input: Value) {
        let err = format_payments(&input).unwrap_err();
        assert_eq!(err.to_string(), "argument should be a sequence");
    }

    #[rstest]
    #[case::multi_key(json!([{ "a1": 1, "a2": 2 }]))]
    #[case::empty_map(json!([{}]))]
    #[case::not_a_map(json!(["a1"]))]
    fn test_format_payments_rejects_bad_elements(#[case] input: Value) {
        let err = format_payments(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "argument should be a sequence of single-entry mappings"
        );
    }

    #[rstest]
    #[case::string_digits(json!("1500"), json!(1500))]
    #[case::float(json!(2.9), json!(2))]
    #[case::decimal_string(json!("1500.0"), json!(1500))]
    #[case::fractional_string(json!(" 2.9 "), json!(2))]
    #[case::large(json!(45_000_000_000_000_000u64), json!(45_000_000_000_000_000u64))]
    fn test_format_payments_coerces_amounts(#[case] amount: Value, #[case] expected: Value) {
        let payments = format_payments(&json!([{ "addr": amount }])).unwrap();
        assert_eq!(payments[0]["amount"]["quantity"], expected);
    }

    #[test]
    fn test_format_payments_rejects_non_numeric_amount() {
        let err = format_payments(&json!([{ "addr": "lots" }])).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[rstest]
    #[case::huge_float(json!(1e20))]
    #[case::huge_negative_float(json!(-1e19))]
    #[case::huge_decimal_string(json!("1e20"))]
    #[case::not_a_number_string(json!("NaN"))]
    fn test_format_payments_rejects_amounts_beyond_64_bits(#[case] amount: Value) {
        let err = format_payments(&json!([{ "addr": amount }])).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().starts_with("amount for 'addr'"));
    }

    #[test]
    fn test_normalize_passes_expanded_form_through() {
        let expanded = json!([{
            "address": "addr1",
            "amount": { "quantity": 42_000_000, "unit": "lovelace" },
            "assets": [{ "policy_id": "pid", "asset_name": "name", "quantity": 0 }]
        }]);
        assert_eq!(normalize_payments(&expanded).unwrap(), expanded);
    }

    #[test]
    fn test_normalize_expands_shorthand() {
        let normalized = normalize_payments(&json!([{ "addr1": 1_000_000 }])).unwrap();
        assert_eq!(normalized[0]["address"], "addr1");
        assert_eq!(normalized[0]["amount"]["unit"], "lovelace");
    }

    #[test]
    fn test_guards() {
        assert!(verify_param_is_map(&json!({})).is_ok());
        assert!(verify_param_is_array(&json!([])).is_ok());
        assert_eq!(
            verify_param_is_map(&json!("x")).unwrap_err().to_string(),
            "argument should be a mapping"
        );
        assert_eq!(
            verify_param_is_array(&json!({})).unwrap_err().to_string(),
            "argument should be a sequence"
        );
    }
}
