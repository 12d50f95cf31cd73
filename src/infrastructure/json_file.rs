use crate::domain::ports::TransactionSource;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use crate::interfaces::json::transaction_reader::TransactionReader;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a JSON array of transactions from disk.
///
/// The file is re-read on every `load`, so edits to it are picked up by the
/// next query without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TransactionSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Transaction>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let transactions = TransactionReader::new(bytes.as_slice()).transactions()?;
        tracing::debug!(path = %self.path.display(), count = transactions.len(), "Loaded transactions");
        Ok(transactions)
    }
}
