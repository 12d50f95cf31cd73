use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One item-quantity-price entry within a transaction.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct LineItem {
    pub item_id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: i64,
}

/// A single purchase event.
///
/// Records are deserialized once per request from the data source and never
/// mutated afterwards. `total_amount` is expected to match the items but is
/// not checked here.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    pub transaction_id: String,
    pub customer_id: i64,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub items: Vec<LineItem>,
}

impl Transaction {
    pub fn contains_item(&self, item_id: i64) -> bool {
        self.items.iter().any(|item| item.item_id == item_id)
    }
}
