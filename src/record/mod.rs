//! Save records: a plain-text snapshot of one game.
//!
//! `codec` converts between `Record` and text; `store` maps record names
//! to files and does the I/O.

pub mod codec;
pub mod store;

pub use codec::{decode, encode, Record, SlotStatus, HEADER_LINES, RECORD_LINES};
pub use store::{list_records, read_record, record_path, write_record};
