//! Arabic ↔ Roman numeral conversion over parameterized numeral tables.

pub mod config;
pub mod convert;
mod error;
pub mod settings;
pub mod table;

#[cfg(test)]
mod tests;

pub use convert::{
    arabic_to_roman, roman_symbols_to_arabic, roman_symbols_to_arabic_with, roman_to_arabic,
    roman_to_arabic_with, ParseOptions,
};
pub use error::NumeralError;
pub use table::{largest_numeral_value, NumeralTable, DEFAULT_TABLE};
