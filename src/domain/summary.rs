use super::transaction::Transaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CustomerRevenue {
    pub customer_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ItemQuantity {
    pub item_id: i64,
    /// Name of the first line item seen with this identifier.
    pub name: String,
    pub total_quantity: i64,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct DateRevenue {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
}

/// The answer to a query: raw transactions when no known grouping was
/// requested, otherwise one summary per group in first-seen order.
///
/// Every variant serializes as a bare JSON array.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum QueryResult {
    Transactions(Vec<Transaction>),
    Customers(Vec<CustomerRevenue>),
    Items(Vec<ItemQuantity>),
    Dates(Vec<DateRevenue>),
}

impl QueryResult {
    pub fn len(&self) -> usize {
        match self {
            Self::Transactions(rows) => rows.len(),
            Self::Customers(rows) => rows.len(),
            Self::Items(rows) => rows.len(),
            Self::Dates(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
