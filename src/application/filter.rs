use crate::domain::query::{DateBounds, Filters};
use crate::domain::transaction::Transaction;

pub fn by_customer(transactions: Vec<Transaction>, customer_id: i64) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|tx| tx.customer_id == customer_id)
        .collect()
}

/// Keeps transactions with at least one line item carrying `item_id`.
pub fn by_item(transactions: Vec<Transaction>, item_id: i64) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|tx| tx.contains_item(item_id))
        .collect()
}

pub fn by_date_range(transactions: Vec<Transaction>, bounds: DateBounds) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|tx| bounds.contains(tx.date))
        .collect()
}

/// Returns the transactions matching every filter that is set.
///
/// Narrows in a fixed order (customer, item, date range), each step working
/// on the output of the previous one.
pub fn filter_transactions(transactions: &[Transaction], filters: &Filters) -> Vec<Transaction> {
    let mut filtered = transactions.to_vec();

    if let Some(customer_id) = filters.customer_id {
        filtered = by_customer(filtered, customer_id);
        tracing::debug!(customer_id, remaining = filtered.len(), "Filtered by customer");
    }
    if let Some(item_id) = filters.item_id {
        filtered = by_item(filtered, item_id);
        tracing::debug!(item_id, remaining = filtered.len(), "Filtered by item");
    }
    if let Some(bounds) = filters.date_range {
        filtered = by_date_range(filtered, bounds);
        tracing::debug!(
            start = %bounds.start,
            end = %bounds.end,
            remaining = filtered.len(),
            "Filtered by date range"
        );
    }

    filtered
}
