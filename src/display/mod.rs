//! Terminal display module
//!
//! Prints markdown text with automatic TTY detection.

mod formatter;
mod terminal;

pub use formatter::print_markdown;
