use super::transaction::Transaction;
use crate::error::Result;
use async_trait::async_trait;

/// Supplies the full transaction collection before each query.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Transaction>>;
}

pub type TransactionSourceBox = Box<dyn TransactionSource>;
