//! Symbol frequency counting.

use std::collections::HashMap;

use crate::tree::{CodeNode, Occurrence};
use crate::Symbol;

/// Occurrence counts per distinct symbol, in first-occurrence order.
///
/// The order matters: tree construction breaks weight ties by position, so
/// keeping the order of first appearance makes the resulting code table a
/// pure function of the input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    /// (symbol, count) in order of first appearance
    entries: Vec<(Symbol, u64)>,
    /// symbol -> index into `entries`
    index: HashMap<Symbol, usize>,
}

impl FrequencyTable {
    /// Count every symbol of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_symbols(text.chars())
    }

    /// Count symbols from any sequence.
    pub fn from_symbols<I: IntoIterator<Item = Symbol>>(symbols: I) -> Self {
        let mut table = Self::default();
        for symbol in symbols {
            table.record(symbol);
        }
        table
    }

    fn record(&mut self, symbol: Symbol) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, 1));
            }
        }
    }

    /// Count for `symbol`, or `None` if it never occurred.
    pub fn get(&self, symbol: Symbol) -> Option<u64> {
        self.index.get(&symbol).map(|&i| self.entries[i].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Iterate (symbol, count) pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// One leaf occurrence per distinct symbol, ready for tree construction.
    pub fn occurrences(&self) -> Vec<Occurrence> {
        self.entries
            .iter()
            .map(|&(symbol, count)| Occurrence::new(count, CodeNode::Leaf(symbol)))
            .collect()
    }
}
