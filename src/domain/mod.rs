//! Record shapes, query payloads and the data-source port.

pub mod ports;
pub mod query;
pub mod summary;
pub mod transaction;
