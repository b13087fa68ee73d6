//! Record layer: the address type, its key table, JSON I/O and CLI edits.

pub mod address;
pub mod assign;
pub mod field;
pub mod io;

pub use address::AddressRecord;
pub use assign::{apply_assignments, edit};
pub use field::Field;
pub use io::{edit_record_file, read_record_file, show_text, to_json, write_record_file};
