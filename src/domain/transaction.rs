//! Request bodies for the transaction endpoints.
//!
//! Optional fields are skipped when `None`; the backend treats an explicit
//! `null` differently from an absent key, so absent values never reach the
//! wire.

use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Time To Live
// ============================================================================

/// A duration expressed the way the backend wants it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Seconds {
    pub quantity: u64,
    pub unit: &'static str,
}

impl Seconds {
    #[must_use]
    pub const fn new(quantity: u64) -> Self {
        Self {
            quantity,
            unit: "second",
        }
    }
}

// ============================================================================
// Transaction Options
// ============================================================================

/// Optional parts of `transactions.create` and `transactions.payment_fees`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionOptions {
    /// `"self"` or a mnemonic sentence (as a JSON array of words).
    pub withdrawal: Option<Value>,
    /// Transaction metadata in the backend's JSON schema.
    pub metadata: Option<Value>,
    /// Time to live, in seconds.
    pub time_to_live: Option<u64>,
}

impl TransactionOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn withdrawal(mut self, withdrawal: impl Into<Value>) -> Self {
        self.withdrawal = Some(withdrawal.into());
        self
    }

    #[must_use]
    pub fn metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn time_to_live(mut self, seconds: u64) -> Self {
        self.time_to_live = Some(seconds);
        self
    }
}

/// Wire body shared by payment-carrying POSTs.
#[derive(Debug, Serialize)]
pub(crate) struct PaymentBody<'a> {
    pub payments: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdrawal: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<Seconds>,
}

impl<'a> PaymentBody<'a> {
    pub(crate) fn new(payments: Value) -> Self {
        Self {
            payments,
            passphrase: None,
            withdrawal: None,
            metadata: None,
            time_to_live: None,
        }
    }

    pub(crate) fn with_options(mut self, options: &'a TransactionOptions) -> Self {
        self.withdrawal = options.withdrawal.as_ref();
        self.metadata = options.metadata.as_ref();
        self.time_to_live = options.time_to_live.map(Seconds::new);
        self
    }
}

// ============================================================================
// Construct
// ============================================================================

/// Body of `transactions-construct` for Shelley and shared wallets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConstructTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdrawal: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(rename = "mint_burn", skip_serializing_if = "Option::is_none")]
    pub mint: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegations: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_interval: Option<Value>,
    /// Output encoding, `"base16"` or `"base64"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

/// Body of `transactions-construct` for Byron wallets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ByronConstructTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_interval: Option<Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignBody<'a> {
    pub passphrase: &'a str,
    pub transaction: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<&'a str>,
}

// ============================================================================
// Signatures
// ============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct SignMetadataBody<'a> {
    pub passphrase: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<&'a Value>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payment_body_omits_absent_options() {
        let body = PaymentBody::new(json!([]));
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "payments": [] }));
    }

    #[test]
    fn test_payment_body_with_all_options() {
        let options = TransactionOptions::new()
            .withdrawal("self")
            .metadata(json!({ "1": "abc" }))
            .time_to_live(10);
        let mut body = PaymentBody::new(json!([])).with_options(&options);
        body.passphrase = Some("Secure Passphrase");

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "payments": [],
                "passphrase": "Secure Passphrase",
                "withdrawal": "self",
                "metadata": { "1": "abc" },
                "time_to_live": { "quantity": 10, "unit": "second" }
            })
        );
    }

    #[test]
    fn test_construct_renames_mint() {
        let construct = ConstructTransaction {
            mint: Some(json!([{ "operation": { "mint": { "quantity": 1 } } }])),
            encoding: Some("base64".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&construct).unwrap();
        assert!(value.get("mint").is_none());
        assert!(value.get("mint_burn").is_some());
        assert_eq!(value["encoding"], "base64");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_byron_construct_keeps_mint_key() {
        let construct = ByronConstructTransaction {
            mint: Some(json!([])),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&construct).unwrap(), json!({ "mint": [] }));
    }

    #[test]
    fn test_empty_construct_is_empty_object() {
        let value = serde_json::to_value(ConstructTransaction::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_sign_body_encoding_optional() {
        let body = SignBody {
            passphrase: "pass",
            transaction: "tx",
            encoding: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "passphrase": "pass", "transaction": "tx" })
        );
    }
}
