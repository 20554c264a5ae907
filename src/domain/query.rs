//! Query-string rendering.
//!
//! Values are written as-is: nothing is percent-encoded. The wallet backend
//! has always been called this way, so keys and values must already be
//! URL-safe (timestamps, enum words, numbers).

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use super::error::Result;
use super::payment::verify_param_is_map;

/// Render `query` as `?k1=v1&k2=v2` in insertion order.
///
/// # Errors
///
/// Returns `WalletError::InvalidArgument` if `query` is not an object.
pub fn to_query(query: &Value) -> Result<String> {
    let map = verify_param_is_map(query)?;
    let pairs = map
        .iter()
        .map(|(key, value)| format!("{key}={}", render_value(value)))
        .collect::<Vec<_>>()
        .join("&");
    Ok(format!("?{pairs}"))
}

/// Query suffix for an optional filter; empty when absent or empty.
pub(crate) fn query_suffix(query: Option<&Value>) -> Result<String> {
    match query {
        None => Ok(String::new()),
        Some(Value::Object(map)) if map.is_empty() => Ok(String::new()),
        Some(query) => to_query(query),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// ============================================================================
// Typed Transaction Query
// ============================================================================

/// Sort order accepted by the transaction listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Filters for `transactions.list`.
///
/// ```ignore
/// let query = TransactionQuery::new()
///     .start(start)
///     .order(SortOrder::Ascending)
///     .to_value();
/// shelley.transactions().list(wid, Some(&query)).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionQuery {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub order: Option<SortOrder>,
    pub min_withdrawal: Option<u64>,
    pub max_count: Option<u32>,
}

impl TransactionQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    #[must_use]
    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    #[must_use]
    pub fn min_withdrawal(mut self, lovelace: u64) -> Self {
        self.min_withdrawal = Some(lovelace);
        self
    }

    #[must_use]
    pub fn max_count(mut self, count: u32) -> Self {
        self.max_count = Some(count);
        self
    }

    /// Build the query object; unset filters are left out.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(start) = self.start {
            map.insert("start".into(), Value::String(rfc3339(start)));
        }
        if let Some(end) = self.end {
            map.insert("end".into(), Value::String(rfc3339(end)));
        }
        if let Some(order) = self.order {
            map.insert("order".into(), Value::String(order.as_str().into()));
        }
        if let Some(min) = self.min_withdrawal {
            map.insert("minWithdrawal".into(), Value::from(min));
        }
        if let Some(max) = self.max_count {
            map.insert("max_count".into(), Value::from(max));
        }
        Value::Object(map)
    }
}

fn rfc3339(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use insta::assert_snapshot;
    use serde_json::json;

    #[test]
    fn test_to_query_preserves_insertion_order() {
        assert_snapshot!(to_query(&json!({ "a": 1, "b": 2 })).unwrap(), @"?a=1&b=2");
        assert_snapshot!(to_query(&json!({ "b": 2, "a": 1 })).unwrap(), @"?b=2&a=1");
        assert_eq!(to_query(&json!({ "a": 1 })).unwrap(), "?a=1");
    }

    #[test]
    fn test_to_query_does_not_escape() {
        let query = json!({ "start": "2012-09-25T10:15:00Z", "q": "a b&c" });
        assert_snapshot!(to_query(&query).unwrap(), @"?start=2012-09-25T10:15:00Z&q=a b&c");
    }

    #[test]
    fn test_to_query_value_rendering() {
        let query = json!({ "hash": true, "state": "used", "empty": null });
        assert_eq!(to_query(&query).unwrap(), "?hash=true&state=used&empty=");
    }

    #[test]
    fn test_to_query_rejects_non_mapping() {
        let err = to_query(&json!("BadArg")).unwrap_err();
        assert_eq!(err.to_string(), "argument should be a mapping");
    }

    #[test]
    fn test_query_suffix_skips_empty() {
        assert_eq!(query_suffix(None).unwrap(), "");
        assert_eq!(query_suffix(Some(&json!({}))).unwrap(), "");
        assert_eq!(
            query_suffix(Some(&json!({ "state": "used" }))).unwrap(),
            "?state=used"
        );
        assert!(query_suffix(Some(&json!([1]))).is_err());
    }

    #[test]
    fn test_transaction_query_renders_set_fields_only() {
        let start = Utc.with_ymd_and_hms(2012, 9, 25, 10, 15, 0).unwrap();
        let query = TransactionQuery::new()
            .start(start)
            .order(SortOrder::Descending)
            .to_value();
        assert_snapshot!(
            to_query(&query).unwrap(),
            @"?start=2012-09-25T10:15:00Z&order=descending"
        );
    }

    #[test]
    fn test_transaction_query_empty() {
        assert_eq!(TransactionQuery::new().to_value(), json!({}));
        assert_eq!(SortOrder::default(), SortOrder::Descending);
        assert_eq!(SortOrder::Ascending.as_str(), "ascending");
    }

    #[test]
    fn test_transaction_query_numeric_filters() {
        let query = TransactionQuery::new()
            .min_withdrawal(1_000_000)
            .max_count(10)
            .to_value();
        assert_eq!(query, json!({ "minWithdrawal": 1_000_000, "max_count": 10 }));
    }
}
