//! Data models module
//!
//! Defines the journal's calendar date and the on-disk path derived from it.

pub mod date;
pub mod path;

pub use date::JournalDate;
pub use path::JournalPath;
