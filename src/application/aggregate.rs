use crate::domain::query::GroupBy;
use crate::domain::summary::{CustomerRevenue, DateRevenue, ItemQuantity, QueryResult};
use crate::domain::transaction::Transaction;
use crate::error::{QueryError, Result};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::hash::Hash;

/// Groups keyed by `K`, yielded in the order their key was first seen.
struct OrderedGroups<K, V> {
    index: HashMap<K, usize>,
    groups: Vec<V>,
}

impl<K: Hash + Eq, V> OrderedGroups<K, V> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    fn entry(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        let next = self.groups.len();
        let slot = *self.index.entry(key).or_insert(next);
        if slot == next {
            self.groups.push(init());
        }
        &mut self.groups[slot]
    }

    fn into_vec(self) -> Vec<V> {
        self.groups
    }
}

pub fn aggregate_by_customer(transactions: &[Transaction]) -> Result<Vec<CustomerRevenue>> {
    let mut groups = OrderedGroups::new();
    for tx in transactions {
        let group = groups.entry(tx.customer_id, || CustomerRevenue {
            customer_id: tx.customer_id,
            total_revenue: Decimal::ZERO,
        });
        group.total_revenue = group
            .total_revenue
            .checked_add(tx.total_amount)
            .ok_or_else(|| overflow(GroupBy::Customer, tx.customer_id))?;
    }
    Ok(groups.into_vec())
}

/// Sums quantities per line-item identifier across all transactions.
///
/// Repeated identifiers inside one transaction each count.
pub fn aggregate_by_item(transactions: &[Transaction]) -> Result<Vec<ItemQuantity>> {
    let mut groups = OrderedGroups::new();
    for item in transactions.iter().flat_map(|tx| &tx.items) {
        let group = groups.entry(item.item_id, || ItemQuantity {
            item_id: item.item_id,
            name: item.name.clone(),
            total_quantity: 0,
        });
        group.total_quantity = group
            .total_quantity
            .checked_add(item.quantity)
            .ok_or_else(|| overflow(GroupBy::Item, item.item_id))?;
    }
    Ok(groups.into_vec())
}

pub fn aggregate_by_date(transactions: &[Transaction]) -> Result<Vec<DateRevenue>> {
    let mut groups = OrderedGroups::new();
    for tx in transactions {
        let group = groups.entry(tx.date, || DateRevenue {
            date: tx.date,
            total_revenue: Decimal::ZERO,
        });
        group.total_revenue = group
            .total_revenue
            .checked_add(tx.total_amount)
            .ok_or_else(|| overflow(GroupBy::Date, tx.date))?;
    }
    Ok(groups.into_vec())
}

fn overflow(group_by: GroupBy, group: impl ToString) -> QueryError {
    QueryError::AggregateOverflow {
        group_by: group_by.as_str(),
        group: group.to_string(),
    }
}

/// Aggregates by `group_by`, or hands the transactions back untouched when
/// there is no grouping.
pub fn aggregate(transactions: Vec<Transaction>, group_by: Option<GroupBy>) -> Result<QueryResult> {
    Ok(match group_by {
        Some(GroupBy::Customer) => QueryResult::Customers(aggregate_by_customer(&transactions)?),
        Some(GroupBy::Item) => QueryResult::Items(aggregate_by_item(&transactions)?),
        Some(GroupBy::Date) => QueryResult::Dates(aggregate_by_date(&transactions)?),
        None => QueryResult::Transactions(transactions),
    })
}
