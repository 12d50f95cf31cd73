#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use txquery::domain::transaction::{LineItem, Transaction};

pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/data.json")
}

pub fn write_dataset(path: &Path, transactions: &[Transaction]) -> Result<(), std::io::Error> {
    let json = serde_json::to_vec_pretty(transactions)?;
    std::fs::write(path, json)
}

/// Random but valid transactions drawn from small id and date pools so that
/// filters and groups actually collide.
pub fn random_transactions<R: Rng>(rng: &mut R, count: usize) -> Vec<Transaction> {
    let epoch = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    (1..=count)
        .map(|n| {
            let items: Vec<LineItem> = (0..rng.gen_range(1..=3))
                .map(|_| {
                    let item_id = rng.gen_range(1..=6);
                    LineItem {
                        item_id,
                        name: format!("Item {item_id}"),
                        price: Decimal::new(rng.gen_range(1..=50_000), 2),
                        quantity: rng.gen_range(1..=5),
                    }
                })
                .collect();
            let total_amount = items
                .iter()
                .map(|item| item.price * Decimal::from(item.quantity))
                .sum();

            Transaction {
                transaction_id: format!("TXN{n:04}"),
                customer_id: rng.gen_range(1..=5),
                date: epoch + Days::new(rng.gen_range(0..60)),
                total_amount,
                items,
            }
        })
        .collect()
}
