//! Compression statistics.
//!
//! Summarizes what an encode run produced: input size, table size, payload
//! size, and how long it took. Collected explicitly by the caller around the
//! encode and pack steps.

use std::time::{Duration, Instant};

use crate::transcoder::{Compressed, Encoding};

/// Sizes and timing of one compression run.
#[derive(Debug, Clone)]
pub struct CompressionStats {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Input ===
    /// Symbols (chars) in the input text
    pub input_symbols: u64,

    /// UTF-8 bytes of the input text
    pub input_bytes: u64,

    /// Distinct symbols, i.e. code table entries
    pub distinct_symbols: u64,

    // === Output ===
    /// Encoded payload length in bits, before packing
    pub payload_bits: u64,

    /// Packed payload length in bytes
    pub packed_bytes: u64,

    /// Scheme string length in bytes
    pub scheme_bytes: u64,

    /// Longest code in the table
    pub max_code_len: u64,
}

impl CompressionStats {
    /// Create empty stats with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_symbols: 0,
            input_bytes: 0,
            distinct_symbols: 0,
            payload_bits: 0,
            packed_bytes: 0,
            scheme_bytes: 0,
            max_code_len: 0,
        }
    }

    /// Record the input text.
    pub fn record_input(&mut self, text: &str) {
        self.input_symbols = text.chars().count() as u64;
        self.input_bytes = text.len() as u64;
    }

    /// Record the encoding and its persisted form.
    pub fn record_output(&mut self, encoding: &Encoding, compressed: &Compressed) {
        self.distinct_symbols = encoding.table.len() as u64;
        self.max_code_len = encoding.table.max_code_len() as u64;
        self.payload_bits = encoding.bits.len() as u64;
        self.packed_bytes = compressed.payload.len() as u64;
        self.scheme_bytes = compressed.scheme.len() as u64;
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Packed payload plus scheme, relative to the input bytes.
    ///
    /// Returns 0.0 if the input was empty.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            (self.packed_bytes + self.scheme_bytes) as f64 / self.input_bytes as f64
        }
    }

    /// Average code length per input symbol.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.input_symbols == 0 {
            0.0
        } else {
            self.payload_bits as f64 / self.input_symbols as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Compression Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();
        println!("Input:  {} symbols, {} bytes", self.input_symbols, self.input_bytes);
        println!(
            "Table:  {} symbols, longest code {} bits, scheme {} bytes",
            self.distinct_symbols, self.max_code_len, self.scheme_bytes
        );
        println!("Output: {} bits -> {} bytes packed", self.payload_bits, self.packed_bytes);
        println!();
        println!("Bits per symbol: {:.3}", self.bits_per_symbol());
        println!("Ratio (payload + scheme): {:.1}%", self.compression_ratio() * 100.0);
        println!();
    }

    /// Export stats as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             input_symbols={}\n\
             input_bytes={}\n\
             distinct_symbols={}\n\
             max_code_len={}\n\
             payload_bits={}\n\
             packed_bytes={}\n\
             scheme_bytes={}\n\
             bits_per_symbol={:.4}\n\
             compression_ratio={:.4}\n",
            self.duration().as_millis(),
            self.input_symbols,
            self.input_bytes,
            self.distinct_symbols,
            self.max_code_len,
            self.payload_bits,
            self.packed_bytes,
            self.scheme_bytes,
            self.bits_per_symbol(),
            self.compression_ratio(),
        )
    }
}

impl Default for CompressionStats {
    fn default() -> Self {
        Self::new()
    }
}
