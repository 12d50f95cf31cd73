use crate::domain::query::QueryRequest;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use serde_json::Value;
use std::io::Read;

/// Reads a JSON array of transactions from any byte source.
///
/// Every record is deserialized into a typed [`Transaction`], so a missing
/// field or a malformed date fails here rather than halfway through a query.
pub struct TransactionReader<R: Read> {
    source: R,
}

impl<R: Read> TransactionReader<R> {
    /// Creates a new `TransactionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn transactions(self) -> Result<Vec<Transaction>> {
        Ok(serde_json::from_reader(self.source)?)
    }
}

/// Parses a query payload.
///
/// An empty body, or one holding an empty JSON value (`null`, `false`, `0`,
/// `""`, `[]`), is the empty query.
pub fn read_request(body: &[u8]) -> Result<QueryRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(QueryRequest::default());
    }
    let value: Value = serde_json::from_slice(body)?;
    if is_empty_value(&value) {
        return Ok(QueryRequest::default());
    }
    Ok(serde_json::from_value(value)?)
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_document() {
        let data = r#"[
            {"transaction_id": "T1", "customer_id": 1, "date": "2024-01-01", "total_amount": 10,
             "items": [{"item_id": 5, "name": "A", "price": 5.0, "quantity": 2}]},
            {"transaction_id": "T2", "customer_id": 2, "date": "2024-02-01", "total_amount": 19.99,
             "items": [{"item_id": 6, "name": "B", "price": 19.99, "quantity": 1}]}
        ]"#;
        let transactions = TransactionReader::new(data.as_bytes()).transactions().unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].total_amount, dec!(10));
        assert_eq!(transactions[1].total_amount, dec!(19.99));
        assert_eq!(transactions[1].items[0].name, "B");
    }

    #[test]
    fn test_reader_missing_field() {
        let data = r#"[{"transaction_id": "T1", "customer_id": 1, "date": "2024-01-01", "items": []}]"#;
        assert!(TransactionReader::new(data.as_bytes()).transactions().is_err());
    }

    #[test]
    fn test_reader_rejects_non_integer_customer() {
        let data = r#"[{"transaction_id": "T1", "customer_id": "abc", "date": "2024-01-01",
            "total_amount": 1, "items": []}]"#;
        assert!(TransactionReader::new(data.as_bytes()).transactions().is_err());
    }

    #[test]
    fn test_read_request_empty_body() {
        assert_eq!(read_request(b"").unwrap(), QueryRequest::default());
        assert_eq!(read_request(b" \n").unwrap(), QueryRequest::default());
        assert_eq!(read_request(b"null").unwrap(), QueryRequest::default());
        assert_eq!(read_request(b" null\n").unwrap(), QueryRequest::default());
        assert_eq!(read_request(b"{}").unwrap(), QueryRequest::default());
    }

    #[test]
    fn test_read_request_empty_json_values() {
        for body in [&b"false"[..], b"0", b"\"\"", b"[]"] {
            assert_eq!(read_request(body).unwrap(), QueryRequest::default());
        }
    }

    #[test]
    fn test_read_request_non_object_value() {
        assert!(read_request(b"42").is_err());
        assert!(read_request(b"true").is_err());
        assert!(read_request(b"\"customer_id\"").is_err());
    }

    #[test]
    fn test_read_request_keeps_non_string_group_by() {
        let req = read_request(br#"{"group_by": 5}"#).unwrap();
        assert_eq!(req.group_by, Some(Value::from(5)));
    }

    #[test]
    fn test_read_request_ignores_unknown_fields() {
        let req = read_request(br#"{"group_by": "date", "page": 3}"#).unwrap();
        assert_eq!(req.group_by, Some(Value::from("date")));
    }

    #[test]
    fn test_read_request_malformed_body() {
        assert!(read_request(b"{group_by:").is_err());
    }
}
