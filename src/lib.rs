//! Postal address records: the record type, its field key table, JSON I/O and
//! `key=value` edits.

pub mod record;

pub use record::{AddressRecord, Field};

pub type Result<T> = anyhow::Result<T>;
