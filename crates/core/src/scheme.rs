//! Persisted text form of a code table ("scheme").
//!
//! # Format
//!
//! ```text
//! entry ( '-' entry )*
//! entry = <decimal code point> ':' <bits>
//! ```
//!
//! For example `97:0-98:10-99:11` maps `a -> 0`, `b -> 10`, `c -> 11`.
//! Entries are written in ascending code point order. There is no escaping:
//! neither field can contain `-` or `:`. The empty string is the scheme of
//! the empty table.

use std::fmt;
use std::str::FromStr;

use crate::bits::BitString;
use crate::code_table::CodeTable;
use crate::error::{Error, Result, SchemeError};
use crate::Symbol;

/// Separator between entries
pub const ENTRY_DELIMITER: char = '-';

/// Separator between symbol and code within an entry
pub const FIELD_SEPARATOR: char = ':';

/// Render `table` in scheme form.
pub fn to_scheme(table: &CodeTable) -> String {
    let mut out = String::new();
    for (i, (symbol, code)) in table.iter().enumerate() {
        if i > 0 {
            out.push(ENTRY_DELIMITER);
        }
        out.push_str(&u32::from(symbol).to_string());
        out.push(FIELD_SEPARATOR);
        out.push_str(&code.to_string());
    }
    out
}

/// Parse a scheme back into a code table.
///
/// Surrounding whitespace (such as a trailing newline) is ignored.
///
/// # Errors
/// - `SchemeError::MalformedEntry` if an entry is not exactly two fields
/// - `SchemeError::InvalidSymbol` if the symbol is not a decimal Unicode
///   scalar value
/// - `SchemeError::InvalidBit` if the code contains anything but `0`/`1`
/// - any validation error of [`CodeTable::from_entries`]
pub fn parse_scheme(scheme: &str) -> Result<CodeTable> {
    let scheme = scheme.trim();
    if scheme.is_empty() {
        return Ok(CodeTable::default());
    }

    let entries = scheme
        .split(ENTRY_DELIMITER)
        .map(parse_entry)
        .collect::<Result<Vec<_>>>()?;

    let table = CodeTable::from_entries(entries)?;
    log::debug!("parsed scheme with {} entries", table.len());
    Ok(table)
}

fn parse_entry(entry: &str) -> Result<(Symbol, BitString)> {
    let malformed = || SchemeError::MalformedEntry {
        entry: entry.to_string(),
    };

    let mut fields = entry.split(FIELD_SEPARATOR);
    let (Some(symbol), Some(code), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(malformed().into());
    };

    let symbol = symbol
        .parse::<u32>()
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| SchemeError::InvalidSymbol {
            value: symbol.to_string(),
        })?;

    Ok((symbol, code.parse()?))
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_scheme(self))
    }
}

impl FromStr for CodeTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_scheme(s)
    }
}
