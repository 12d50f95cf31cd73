use super::aggregate::aggregate;
use super::filter::filter_transactions;
use crate::domain::ports::TransactionSourceBox;
use crate::domain::query::{Filters, GroupBy, QueryRequest};
use crate::domain::summary::QueryResult;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use serde_json::Value;

/// Filters `transactions` and aggregates the survivors as `request` asks.
///
/// All filter values are converted before any record is touched, so a bad
/// value never produces a partial result. An unknown `group_by` is not an
/// error: the filtered transactions are returned as they are.
pub fn execute(transactions: &[Transaction], request: &QueryRequest) -> Result<QueryResult> {
    let filters = Filters::from_request(request)?;
    let group_by = resolve_group_by(request.group_by.as_ref());

    let filtered = filter_transactions(transactions, &filters);
    tracing::debug!(
        group_by = group_by.map_or("none", |key| key.as_str()),
        rows = filtered.len(),
        "Aggregating"
    );
    aggregate(filtered, group_by)
}

/// Absent, `null` and `""` mean no grouping. Anything else that is not a
/// known key also means no grouping, with a warning.
fn resolve_group_by(value: Option<&Value>) -> Option<GroupBy> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(key)) if key.is_empty() => None,
        Some(Value::String(key)) => {
            let parsed = GroupBy::parse(key);
            if parsed.is_none() {
                tracing::warn!(group_by = %key, "Unknown grouping key, returning ungrouped results");
            }
            parsed
        }
        Some(other) => {
            tracing::warn!(group_by = %other, "Unknown grouping key, returning ungrouped results");
            None
        }
    }
}

/// Runs queries against a transaction source.
///
/// `QueryEngine` keeps no state besides its source: the full dataset is
/// loaded fresh for every query and dropped when the query returns.
pub struct QueryEngine {
    source: TransactionSourceBox,
}

impl QueryEngine {
    /// Creates a new `QueryEngine` reading from `source`.
    pub fn new(source: TransactionSourceBox) -> Self {
        Self { source }
    }

    /// Loads the dataset and answers `request`.
    pub async fn run(&self, request: &QueryRequest) -> Result<QueryResult> {
        let transactions = self.source.load().await?;
        let result = execute(&transactions, request)?;
        tracing::info!(
            loaded = transactions.len(),
            returned = result.len(),
            "Query answered"
        );
        Ok(result)
    }
}
