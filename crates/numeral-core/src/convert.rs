//! Arabic ↔ Roman conversion over an arbitrary numeral table.
//!
//! Both directions walk the table one decimal order at a time, highest first.
//! The current order is a sub-slice of the table: `[one, five, next-one, ..]`,
//! and moving to the next lower order drops its two leading symbols. Neither
//! the table nor the input is ever mutated.

use tracing::{debug, debug_span};

use crate::error::NumeralError;
use crate::table::{largest_numeral_value, NumeralTable, DEFAULT_TABLE};

/// Convert `value` to a Roman numeral using `numerals` (or the default table).
///
/// Returns an empty string for `0`. Values of four times the table's largest
/// symbol or more cannot be written and yield [`NumeralError::OutOfRange`].
pub fn arabic_to_roman(
    value: u64,
    numerals: Option<&NumeralTable>,
) -> Result<String, NumeralError> {
    let table = numerals.unwrap_or(&DEFAULT_TABLE);
    let _span = debug_span!("arabic_to_roman", value).entered();

    let max = table.max_value();
    if value > max {
        return Err(NumeralError::OutOfRange { value, max });
    }

    let result = encode(value, table.symbols());
    debug!(%result);
    Ok(result)
}

/// Options for decoding Roman input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Match input characters against table symbols regardless of case.
    pub ignore_case: bool,
}

/// Convert a Roman numeral string to its value using `numerals` (or the
/// default table).
///
/// An empty string is `0`. Symbols must match the table exactly; see
/// [`roman_to_arabic_with`] for case-insensitive matching.
pub fn roman_to_arabic(input: &str, numerals: Option<&NumeralTable>) -> Result<u64, NumeralError> {
    roman_to_arabic_with(input, numerals, ParseOptions::default())
}

/// [`roman_to_arabic`] with explicit decoding options.
pub fn roman_to_arabic_with(
    input: &str,
    numerals: Option<&NumeralTable>,
    options: ParseOptions,
) -> Result<u64, NumeralError> {
    let symbols: Vec<char> = input.chars().collect();
    roman_symbols_to_arabic_with(&symbols, numerals, options)
}

/// Convert an ordered symbol sequence to its value. See [`roman_to_arabic`].
pub fn roman_symbols_to_arabic(
    symbols: &[char],
    numerals: Option<&NumeralTable>,
) -> Result<u64, NumeralError> {
    roman_symbols_to_arabic_with(symbols, numerals, ParseOptions::default())
}

/// [`roman_symbols_to_arabic`] with explicit decoding options.
pub fn roman_symbols_to_arabic_with(
    symbols: &[char],
    numerals: Option<&NumeralTable>,
    options: ParseOptions,
) -> Result<u64, NumeralError> {
    let table = numerals.unwrap_or(&DEFAULT_TABLE);
    let _span = debug_span!(
        "roman_to_arabic",
        len = symbols.len(),
        ignore_case = options.ignore_case
    )
    .entered();

    let value = parse(symbols, table, options.ignore_case)?;
    debug!(value);
    Ok(value)
}

/// Encode an in-range value. `symbols` is a validated table.
fn encode(value: u64, mut symbols: &[char]) -> String {
    let mut result = String::new();
    let mut rest = value;

    while rest > 0 {
        let largest = largest_numeral_value(symbols);
        let unit = largest / 10;
        let count = rest / largest;

        if (1..4).contains(&count) {
            // Repeatable symbol (I, X, C, M)
            result.extend(std::iter::repeat(symbols[0]).take(count as usize));
            rest %= largest;
        } else if unit > 0 && rest % (5 * unit) >= 4 * unit {
            if rest % largest >= 9 * unit {
                // Nine: IX, XC, CM
                result.push(symbols[2]);
                result.push(symbols[0]);
                rest -= 9 * unit;
            } else {
                // Four: IV, XL, CD
                result.push(symbols[2]);
                result.push(symbols[1]);
                rest -= 4 * unit;
            }
        } else if unit > 0 && rest >= 5 * unit {
            result.push(symbols[1]);
            rest -= 5 * unit;
        } else if symbols.len() > 1 {
            symbols = &symbols[2..];
        } else {
            break;
        }
    }

    result
}

/// Decode `input` and reject anything the encoder would not have produced.
pub(crate) fn parse(
    input: &[char],
    table: &NumeralTable,
    ignore_case: bool,
) -> Result<u64, NumeralError> {
    let normalized = normalize(input, table, ignore_case)?;
    let (value, consumed) = decode(&normalized, table.symbols());

    if consumed < normalized.len() {
        return Err(NumeralError::invalid_numeral(
            input,
            format!(
                "unexpected symbol '{}' at position {consumed}",
                input[consumed]
            ),
        ));
    }

    // Structural decoding accepts forms like IIII or VX; the canonical
    // encoding of the decoded value must reproduce the input exactly.
    let canonical = if value > table.max_value() {
        None
    } else {
        Some(encode(value, table.symbols()))
    };
    match canonical {
        Some(ref s) if s.chars().eq(normalized.iter().copied()) => Ok(value),
        Some(s) => Err(NumeralError::invalid_numeral(
            input,
            format!("non-canonical form of {value}, expected {s:?}"),
        )),
        None => Err(NumeralError::invalid_numeral(
            input,
            format!("exceeds the table maximum of {}", table.max_value()),
        )),
    }
}

/// Map every input character onto its table symbol.
fn normalize(
    input: &[char],
    table: &NumeralTable,
    ignore_case: bool,
) -> Result<Vec<char>, NumeralError> {
    input
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if table.contains(c) {
                return Ok(c);
            }
            if ignore_case {
                if let Some(&s) = table
                    .symbols()
                    .iter()
                    .find(|&&s| s.to_lowercase().eq(c.to_lowercase()))
                {
                    return Ok(s);
                }
            }
            Err(NumeralError::invalid_numeral(
                input,
                format!("unknown symbol '{c}' at position {i}"),
            ))
        })
        .collect()
}

/// Structural decode. Returns the value and the number of symbols consumed.
fn decode(input: &[char], mut symbols: &[char]) -> (u64, usize) {
    let mut pos = 0;
    let mut total: u64 = 0;

    loop {
        let largest = largest_numeral_value(symbols);
        let unit = largest / 10;

        while input.get(pos) == Some(&symbols[0]) {
            total = total.saturating_add(largest);
            pos += 1;
        }

        // Possible subtractive pair: IX or IV under an X-headed order
        if symbols.get(2).is_some() && input.get(pos) == symbols.get(2) {
            let next = input.get(pos + 1);
            if next == Some(&symbols[0]) {
                total = total.saturating_add(9 * unit);
                pos += 2;
            } else if next == symbols.get(1) {
                total = total.saturating_add(4 * unit);
                pos += 2;
            }
        }

        if symbols.get(1).is_some() && input.get(pos) == symbols.get(1) {
            total = total.saturating_add(5 * unit);
            pos += 1;
        }

        if pos < input.len() && symbols.len() > 1 {
            symbols = &symbols[2..];
        } else {
            break;
        }
    }

    (total, pos)
}
