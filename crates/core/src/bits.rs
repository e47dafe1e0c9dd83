//! Owned bit sequences.
//!
//! A [`BitString`] is what codes and encoded payloads are made of. Its text
//! form is a string of `'0'` and `'1'` characters, which is also how codes are
//! written into a persisted scheme.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::{Error, SchemeError};

/// A sequence of bits, first bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Create an empty bit-string.
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create an empty bit-string with room for `capacity` bits.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Bits the string can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.bits.capacity()
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Remove and return the last bit.
    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    /// Append all bits of `other`.
    pub fn extend_from_bits(&mut self, other: &[bool]) {
        self.bits.extend_from_slice(other);
    }

    /// Keep only the first `len` bits.
    pub fn truncate(&mut self, len: usize) {
        self.bits.truncate(len);
    }

    /// Borrow the bits as a slice.
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }
}

impl Deref for BitString {
    type Target = [bool];

    fn deref(&self) -> &[bool] {
        &self.bits
    }
}

impl Borrow<[bool]> for BitString {
    fn borrow(&self) -> &[bool] {
        &self.bits
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl From<&[bool]> for BitString {
    fn from(bits: &[bool]) -> Self {
        Self {
            bits: bits.to_vec(),
        }
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self
            .bits
            .iter()
            .map(|&bit| if bit { '1' } else { '0' })
            .collect();
        f.pad(&text)
    }
}

impl FromStr for BitString {
    type Err = Error;

    /// Parse a string of `'0'` and `'1'` characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(offset, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(Error::from(SchemeError::InvalidBit { found, offset })),
            })
            .collect()
    }
}
