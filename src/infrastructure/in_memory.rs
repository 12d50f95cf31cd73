use crate::domain::ports::TransactionSource;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A fixed in-memory dataset.
///
/// Each `load` hands out a fresh copy, so queries never observe each other.
/// Ideal for testing or for embedding the engine next to data that is already
/// in memory.
#[derive(Default, Clone)]
pub struct InMemorySource {
    transactions: Arc<Vec<Transaction>>,
}

impl InMemorySource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Arc::new(transactions),
        }
    }
}

#[async_trait]
impl TransactionSource for InMemorySource {
    async fn load(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_in_memory_source_returns_independent_copies() {
        let source = InMemorySource::new(vec![Transaction {
            transaction_id: "T1".to_string(),
            customer_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            total_amount: dec!(1.0),
            items: vec![],
        }]);

        let mut first = source.load().await.unwrap();
        first.clear();

        let second = source.load().await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].transaction_id, "T1");
    }

    #[tokio::test]
    async fn test_default_source_is_empty() {
        let source = InMemorySource::default();
        assert!(source.load().await.unwrap().is_empty());
    }
}
