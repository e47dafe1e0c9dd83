//! Symbol <-> code mapping.
//!
//! A [`CodeTable`] is derived from a code tree when encoding, or rebuilt from
//! persisted entries when decoding. Either way its codes are non-empty and
//! prefix-free, which is what makes greedy decoding unambiguous.

use std::collections::{BTreeMap, HashMap};

use crate::bits::BitString;
use crate::error::{Result, SchemeError};
use crate::tree::CodeNode;
use crate::Symbol;

/// Bidirectional, immutable mapping between symbols and their codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    /// symbol -> code, ordered by symbol
    codes: BTreeMap<Symbol, BitString>,
    /// code -> symbol
    symbols: HashMap<BitString, Symbol>,
}

impl CodeTable {
    /// Walk the tree and assign each leaf the path leading to it.
    ///
    /// A tree that is a single leaf (one distinct symbol) has no edges; that
    /// symbol gets the one-bit code `0`.
    pub fn derive(root: &CodeNode) -> Self {
        let mut codes = BTreeMap::new();
        match root {
            CodeNode::Leaf(symbol) => {
                codes.insert(*symbol, BitString::from(vec![false]));
            }
            CodeNode::Branch(..) => {
                let mut path = BitString::new();
                collect_codes(root, &mut path, &mut codes);
            }
        }

        let symbols = codes
            .iter()
            .map(|(&symbol, code)| (code.clone(), symbol))
            .collect();

        let table = Self { codes, symbols };
        log::debug!(
            "derived code table: {} symbols, longest code {} bits",
            table.len(),
            table.max_code_len()
        );
        table
    }

    /// Rebuild a table from (symbol, code) entries.
    ///
    /// # Errors
    /// All `SchemeError`:
    /// - `EmptyCode` if a code has no bits
    /// - `DuplicateSymbol` if a symbol is listed twice
    /// - `DuplicateCode` if two symbols share a code
    /// - `NotPrefixFree` if a code is a prefix of another
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Symbol, BitString)>,
    {
        let mut codes = BTreeMap::new();
        let mut symbols = HashMap::new();

        for (symbol, code) in entries {
            if code.is_empty() {
                return Err(SchemeError::EmptyCode { symbol }.into());
            }
            if codes.contains_key(&symbol) {
                return Err(SchemeError::DuplicateSymbol { symbol }.into());
            }
            if symbols.insert(code.clone(), symbol).is_some() {
                return Err(SchemeError::DuplicateCode {
                    code: code.to_string(),
                }
                .into());
            }
            codes.insert(symbol, code);
        }

        check_prefix_free(symbols.keys())?;

        Ok(Self { codes, symbols })
    }

    /// Code assigned to `symbol`.
    pub fn code(&self, symbol: Symbol) -> Option<&BitString> {
        self.codes.get(&symbol)
    }

    /// Symbol whose code is exactly `bits`.
    pub fn symbol(&self, bits: &[bool]) -> Option<Symbol> {
        self.symbols.get(bits).copied()
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate (symbol, code) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &BitString)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(|code| code.len()).max().unwrap_or(0)
    }
}

fn collect_codes(node: &CodeNode, path: &mut BitString, codes: &mut BTreeMap<Symbol, BitString>) {
    match node {
        CodeNode::Leaf(symbol) => {
            codes.insert(*symbol, path.clone());
        }
        CodeNode::Branch(left, right) => {
            path.push(false);
            collect_codes(left, path, codes);
            path.pop();

            path.push(true);
            collect_codes(right, path, codes);
            path.pop();
        }
    }
}

/// In sorted order a code that prefixes others is immediately followed by
/// one of them, so comparing neighbours is enough.
fn check_prefix_free<'a, I>(codes: I) -> Result<()>
where
    I: IntoIterator<Item = &'a BitString>,
{
    let mut sorted: Vec<&BitString> = codes.into_iter().collect();
    sorted.sort();

    for pair in sorted.windows(2) {
        let (prefix, code) = (pair[0], pair[1]);
        if code.starts_with(prefix) {
            return Err(SchemeError::NotPrefixFree {
                prefix: prefix.to_string(),
                code: code.to_string(),
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tree::{build, Occurrence};

    fn leaf(symbol: char) -> CodeNode {
        CodeNode::Leaf(symbol)
    }

    fn code_of(table: &CodeTable, symbol: char) -> String {
        table.code(symbol).map(|c| c.to_string()).unwrap_or_default()
    }

    fn entries(items: &[(char, &str)]) -> Vec<(char, BitString)> {
        items
            .iter()
            .map(|&(symbol, code)| (symbol, code.parse().unwrap()))
            .collect()
    }

    fn assert_prefix_free(table: &CodeTable) {
        let codes: Vec<_> = table.iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn test_one_sided_tree() {
        let root = CodeNode::branch(CodeNode::branch(leaf('a'), leaf('b')), leaf('c'));
        let table = CodeTable::derive(&root);

        assert_eq!(table.len(), 3);
        assert_eq!(code_of(&table, 'a'), "00");
        assert_eq!(code_of(&table, 'b'), "01");
        assert_eq!(code_of(&table, 'c'), "1");
    }

    #[test]
    fn test_balanced_tree() {
        let root = CodeNode::branch(
            CodeNode::branch(leaf('a'), leaf('b')),
            CodeNode::branch(leaf('c'), leaf('d')),
        );
        let table = CodeTable::derive(&root);

        assert_eq!(table.len(), 4);
        assert_eq!(code_of(&table, 'a'), "00");
        assert_eq!(code_of(&table, 'b'), "01");
        assert_eq!(code_of(&table, 'c'), "10");
        assert_eq!(code_of(&table, 'd'), "11");
        assert_eq!(table.max_code_len(), 2);
    }

    #[test]
    fn test_single_leaf_gets_one_bit() {
        let table = CodeTable::derive(&leaf('a'));

        assert_eq!(table.len(), 1);
        assert_eq!(code_of(&table, 'a'), "0");
        assert_eq!(table.symbol(&[false]), Some('a'));
    }

    #[test]
    fn test_inverse_lookup() {
        let root = CodeNode::branch(leaf('x'), leaf('y'));
        let table = CodeTable::derive(&root);

        assert_eq!(table.symbol(&[false]), Some('x'));
        assert_eq!(table.symbol(&[true]), Some('y'));
        assert_eq!(table.symbol(&[true, true]), None);
    }

    #[test]
    fn test_derived_tables_are_prefix_free() {
        let weights: Vec<Occurrence> = "etaoinshrdlu"
            .chars()
            .zip([12u64, 9, 8, 8, 7, 7, 6, 6, 6, 4, 4, 3])
            .map(|(symbol, count)| Occurrence::new(count, leaf(symbol)))
            .collect();
        let table = CodeTable::derive(&build(weights).unwrap());

        assert_eq!(table.len(), 12);
        assert_prefix_free(&table);
        assert!(check_prefix_free(table.iter().map(|(_, code)| code)).is_ok());
    }

    #[test]
    fn test_from_entries() {
        let table =
            CodeTable::from_entries(entries(&[('a', "1"), ('b', "01"), ('c', "001")])).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.symbol(&[false, true]), Some('b'));
        assert_eq!(code_of(&table, 'c'), "001");
    }

    #[test]
    fn test_from_entries_rejects_duplicate_code() {
        let result = CodeTable::from_entries(entries(&[('a', "01"), ('b', "01")]));
        assert!(matches!(
            result,
            Err(Error::Scheme(SchemeError::DuplicateCode { .. }))
        ));
    }

    #[test]
    fn test_from_entries_rejects_duplicate_symbol() {
        let result = CodeTable::from_entries(entries(&[('a', "0"), ('a', "1")]));
        assert!(matches!(
            result,
            Err(Error::Scheme(SchemeError::DuplicateSymbol { symbol: 'a' }))
        ));
    }

    #[test]
    fn test_from_entries_rejects_empty_code() {
        let result = CodeTable::from_entries(entries(&[('a', "")]));
        assert!(matches!(
            result,
            Err(Error::Scheme(SchemeError::EmptyCode { symbol: 'a' }))
        ));
    }

    #[test]
    fn test_from_entries_rejects_prefix() {
        let result = CodeTable::from_entries(entries(&[('a', "0"), ('b', "10"), ('c', "01")]));
        match result {
            Err(Error::Scheme(SchemeError::NotPrefixFree { prefix, code })) => {
                assert_eq!(prefix, "0");
                assert_eq!(code, "01");
            }
            other => panic!("expected NotPrefixFree, got {other:?}"),
        }
    }

    #[test]
    fn test_from_entries_empty() {
        let table = CodeTable::from_entries(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.max_code_len(), 0);
    }
}
