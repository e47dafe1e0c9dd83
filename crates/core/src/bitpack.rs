//! Packing bit-strings into bytes and back.
//!
//! Encoded payloads rarely end on a byte boundary. [`pack`] appends a single
//! `1` sentinel bit and then zero-pads to the next byte boundary, so
//! [`unpack`] can find the real end of the payload by looking for the last
//! `1` bit, even when the payload itself ends in zeros.
//!
//! Both directions are MSB-first: the first bit of the bit-string is the most
//! significant bit of the first byte.
//!
//! # Example
//! ```
//! use huffman_text_core::bitpack::{pack, unpack};
//! use huffman_text_core::BitString;
//!
//! let bits: BitString = "1111000".parse().unwrap();
//! let bytes = pack(&bits);
//! assert_eq!(bytes, vec![0b1111_0001]); // sentinel fills the last bit
//! assert_eq!(unpack(&bytes).unwrap(), bits);
//! ```

use crate::bits::BitString;
use crate::error::{BitPackError, Result};

/// Writes bits MSB-first into a byte buffer.
///
/// # Invariants
/// - `bit_count` is always < 8
#[derive(Debug, Clone)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Accumulator for the current partial byte (MSB-aligned)
    bit_buffer: u8,
    /// Number of bits in bit_buffer (0-7)
    bit_count: u8,
}

impl BitWriter {
    /// Create a new BitWriter with empty output.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a BitWriter expecting roughly `bits` bits of output.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bit_buffer: 0,
            bit_count: 0,
        }
    }

    /// Write a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.bit_buffer |= 0x80 >> self.bit_count;
        }
        self.bit_count += 1;

        if self.bit_count == 8 {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Number of zero bits needed to reach the next byte boundary.
    pub fn bits_to_boundary(&self) -> usize {
        (8 - self.bit_count as usize) % 8
    }

    /// Finish writing and return the output bytes.
    ///
    /// A trailing partial byte is padded with zeros.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bit_count > 0 {
            self.bytes.push(self.bit_buffer);
        }
        self.bytes
    }

    /// Return the total number of bits written (including partial byte).
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.bit_count as usize
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads bits MSB-first from a byte buffer.
///
/// # Invariants
/// - `bit_position` never exceeds `data.len() * 8`
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Current bit position (0 = MSB of first byte)
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a new BitReader for the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_position: 0,
        }
    }

    /// Read the next bit, or `None` at the end of the buffer.
    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.bit_position / 8)?;
        let bit = byte & (0x80 >> (self.bit_position % 8)) != 0;
        self.bit_position += 1;
        Some(bit)
    }

    /// Return the number of bits remaining in the buffer.
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.bit_position
    }

    /// Check if we're at the end of the buffer.
    pub fn is_empty(&self) -> bool {
        self.bit_position >= self.data.len() * 8
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits_remaining();
        (remaining, Some(remaining))
    }
}

/// Pack a bit-string into bytes: payload, one `1` sentinel, zero padding.
///
/// The output is always `(bits.len() + 1).div_ceil(8)` bytes long, so an
/// empty bit-string packs to the single byte `0x80`.
pub fn pack(bits: &BitString) -> Vec<u8> {
    let mut writer = BitWriter::with_capacity(bits.len() + 8);
    for &bit in bits.iter() {
        writer.write_bit(bit);
    }
    writer.write_bit(true);

    let padding = writer.bits_to_boundary();
    for _ in 0..padding {
        writer.write_bit(false);
    }
    debug_assert_eq!(writer.bit_len() % 8, 0);

    log::trace!(
        "packed {} payload bits with {} padding bits",
        bits.len(),
        padding
    );
    writer.finish()
}

/// Recover the bit-string from bytes produced by [`pack`].
///
/// Every byte contributes exactly eight bits. Everything from the last `1`
/// bit (the sentinel) onwards is dropped.
///
/// # Errors
/// `BitPackError::NoSentinelFound` if no byte has any bit set, which
/// includes empty input.
pub fn unpack(bytes: &[u8]) -> Result<BitString> {
    let mut bits: BitString = BitReader::new(bytes).collect();

    let sentinel = bits
        .iter()
        .rposition(|&bit| bit)
        .ok_or(BitPackError::NoSentinelFound)?;
    bits.truncate(sentinel);

    log::trace!(
        "unpacked {} bytes into {} payload bits",
        bytes.len(),
        bits.len()
    );
    Ok(bits)
}
