//! Sample text generation for trying the codec.
//!
//! Generated text mixes sections with different symbol statistics so the
//! code table ends up with a visible spread of code lengths:
//! - runs of a single character
//! - word-like text from a skewed lowercase alphabet
//! - a repeated phrase
//! - occasional non-ASCII characters
//!
//! Output is deterministic for a given seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use huffman_text_core::Result;

use crate::files;

/// Letters in rough English frequency order; earlier letters are drawn more often.
const LETTERS: &[char] = &[
    'e', 't', 'a', 'o', 'i', 'n', 's', 'h', 'r', 'd', 'l', 'c', 'u', 'm', 'w', 'f', 'g', 'y', 'p',
    'b', 'v', 'k', 'j', 'x', 'q', 'z',
];

const PHRASES: &[&str] = &[
    "the quick brown fox jumps over the lazy dog",
    "to be or not to be",
    "all work and no play",
];

const EXTRA: &[char] = &['é', 'ü', 'ß', 'λ', '€', '→', '🦀'];

/// Generate a sample text of exactly `len_chars` characters.
pub fn generate_sample_text(seed: u64, len_chars: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text: Vec<char> = Vec::with_capacity(len_chars);

    while text.len() < len_chars {
        let section_len = rng.gen_range(16..=256);

        match rng.gen_range(0..10) {
            // 20% runs of one character
            0..=1 => {
                let c = LETTERS[rng.gen_range(0..LETTERS.len())];
                text.extend(std::iter::repeat(c).take(section_len));
            }

            // 50% word-like text
            2..=6 => {
                for _ in 0..section_len {
                    text.push(word_char(&mut rng));
                }
                text.push('\n');
            }

            // 20% a repeated phrase
            7..=8 => {
                let phrase = PHRASES[rng.gen_range(0..PHRASES.len())];
                let repeats = section_len / 32 + 1;
                for _ in 0..repeats {
                    text.extend(phrase.chars());
                    text.push(' ');
                }
            }

            // 10% sprinkled non-ASCII
            _ => {
                for _ in 0..section_len / 8 {
                    text.push(EXTRA[rng.gen_range(0..EXTRA.len())]);
                    text.push(word_char(&mut rng));
                }
            }
        }
    }

    text.truncate(len_chars);
    text.into_iter().collect()
}

/// One character of word-like text: a skewed letter, sometimes a space or
/// punctuation, sometimes uppercase.
fn word_char(rng: &mut ChaCha8Rng) -> char {
    match rng.gen_range(0..100) {
        0..=15 => ' ',
        16..=17 => ',',
        18 => '.',
        _ => {
            // min of two draws favors the front of LETTERS
            let i = rng.gen_range(0..LETTERS.len()).min(rng.gen_range(0..LETTERS.len()));
            let c = LETTERS[i];
            if rng.gen_ratio(1, 20) {
                c.to_ascii_uppercase()
            } else {
                c
            }
        }
    }
}

/// Write generated text to a file.
pub fn write_sample_file(path: &std::path::Path, seed: u64, len_chars: usize) -> Result<()> {
    let text = generate_sample_text(seed, len_chars);
    files::write_text(path, &text)
}
