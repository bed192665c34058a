//! Numeral tables: ordered symbol lists, highest value first.
//!
//! A table of `2k + 1` symbols covers `k` full decimal orders plus the final
//! unit symbol. Each triplet `[one, five, next-one]` is worth
//! `[10u, 5u, u]`, so values are positional and never stored.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::NumeralError;

/// Symbols of the standard Roman table.
pub const DEFAULT_SYMBOLS: [char; 7] = ['M', 'D', 'C', 'L', 'X', 'V', 'I'];

/// The standard `M D C L X V I` table (1000 down to 1).
pub static DEFAULT_TABLE: NumeralTable = NumeralTable {
    symbols: Cow::Borrowed(&DEFAULT_SYMBOLS),
};

/// Largest table length whose leading value, 10^19, still fits in a `u64`.
pub const MAX_SYMBOLS: usize = 39;

/// Value of the first (largest) symbol of `symbols`: `10^((len - 1) / 2)`.
///
/// `symbols` must be non-empty and of odd length. This is a caller
/// precondition; `NumeralTable` guarantees it for validated tables.
pub fn largest_numeral_value(symbols: &[char]) -> u64 {
    debug_assert!(
        symbols.len() % 2 == 1,
        "numeral table must have an odd, non-zero length"
    );
    10u64.pow(((symbols.len() - 1) / 2) as u32)
}

/// A validated numeral table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralTable {
    symbols: Cow<'static, [char]>,
}

impl NumeralTable {
    /// Build a table from symbols ordered highest value first.
    ///
    /// Rejects empty or even-length tables, duplicate symbols, and tables
    /// longer than [`MAX_SYMBOLS`].
    pub fn new(symbols: impl Into<Vec<char>>) -> Result<Self, NumeralError> {
        let symbols = symbols.into();
        if symbols.is_empty() {
            return Err(NumeralError::InvalidTable("table is empty".to_string()));
        }
        if symbols.len() % 2 == 0 {
            return Err(NumeralError::InvalidTable(format!(
                "table must have an odd number of symbols, got {}",
                symbols.len()
            )));
        }
        if symbols.len() > MAX_SYMBOLS {
            return Err(NumeralError::InvalidTable(format!(
                "table has {} symbols, at most {MAX_SYMBOLS} are supported",
                symbols.len()
            )));
        }
        for (i, c) in symbols.iter().enumerate() {
            if c.is_whitespace() {
                return Err(NumeralError::InvalidTable(format!(
                    "whitespace symbol at position {i}"
                )));
            }
            if symbols[..i].contains(c) {
                return Err(NumeralError::InvalidTable(format!(
                    "duplicate symbol '{c}'"
                )));
            }
        }
        Ok(Self {
            symbols: Cow::Owned(symbols),
        })
    }

    /// Build a table from string symbols, each exactly one character long.
    pub fn from_strs<S: AsRef<str>>(symbols: &[S]) -> Result<Self, NumeralError> {
        let mut chars = Vec::with_capacity(symbols.len());
        for s in symbols {
            let s = s.as_ref();
            let mut it = s.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => chars.push(c),
                _ => {
                    return Err(NumeralError::InvalidTable(format!(
                        "symbol {s:?} must be a single character"
                    )))
                }
            }
        }
        Self::new(chars)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a validated table.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of full decimal orders above the unit symbol.
    pub fn orders(&self) -> usize {
        (self.symbols.len() - 1) / 2
    }

    /// Value of the first symbol.
    pub fn largest_value(&self) -> u64 {
        largest_numeral_value(&self.symbols)
    }

    /// Largest encodable value: one below four times the largest symbol.
    pub fn max_value(&self) -> u64 {
        self.largest_value()
            .checked_mul(4)
            .map_or(u64::MAX, |limit| limit - 1)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl Default for NumeralTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

impl fmt::Display for NumeralTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.symbols.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Parses a compact table such as `"MDCLXVI"`.
impl FromStr for NumeralTable {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect::<Vec<_>>())
    }
}
