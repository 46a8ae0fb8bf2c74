//! Core domain types, input validation, and deck building for
//! multiple-choice quiz slide decks.

pub mod builder;
pub mod error;
pub mod outline;
pub mod schema;
pub mod types;

pub use builder::DeckBuilder;
pub use error::{Error, Result};
pub use outline::OutlineFormatter;
pub use schema::{records_from_table, Schema};
pub use types::{Deck, InputFormat, Record, Slide, Table, TableRow, TextElement};
