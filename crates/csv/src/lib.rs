//! Delimited text loader for quiz question tables.
//!
//! Reads a header row and data rows into a [`quizdeck_core::Table`],
//! preserving row and column order.

pub mod loader;

pub use loader::CsvLoader;
