//! Application layer containing the query pipeline.
//!
//! A query runs in two stages: `filter` narrows the loaded transactions and
//! `aggregate` groups what is left. `engine` ties both to a transaction source.

pub mod aggregate;
pub mod engine;
pub mod filter;
