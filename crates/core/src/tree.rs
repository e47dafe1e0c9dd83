//! Huffman code tree construction.
//!
//! The tree is built bottom-up from a list of weighted leaves by repeatedly
//! merging the two lightest items. Ties are broken by position in the working
//! list (earliest wins), which keeps the tree reproducible for a given input
//! order.
//!
//! # Merge Step
//!
//! ```text
//! [(1,a) (1,b) (2,c) (3,d)]      lowest = 0, second = 1
//! [(2,ab) (2,c) (3,d)]           lowest = 0, second = 1
//! [(4,abc) (3,d)]                lowest = 1, second = 0
//! [(7, d|abc)]                   root: left = d, right = (ab, c)
//! ```
//!
//! The merged branch replaces the item at `lowest`, with that item as its
//! left child, and the item at `second` is removed.

use crate::error::{HuffmanError, Result};
use crate::Symbol;

/// A node of the code tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeNode {
    /// A symbol
    Leaf(Symbol),
    /// Two subtrees; the left edge is bit `0`, the right edge bit `1`
    Branch(Box<CodeNode>, Box<CodeNode>),
}

impl CodeNode {
    /// Create a branch from two subtrees.
    pub fn branch(left: CodeNode, right: CodeNode) -> Self {
        CodeNode::Branch(Box::new(left), Box::new(right))
    }

    /// The symbol of a leaf.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            CodeNode::Leaf(symbol) => Some(*symbol),
            CodeNode::Branch(..) => None,
        }
    }

    /// Left child of a branch.
    pub fn left(&self) -> Option<&CodeNode> {
        match self {
            CodeNode::Leaf(_) => None,
            CodeNode::Branch(left, _) => Some(left),
        }
    }

    /// Right child of a branch.
    pub fn right(&self) -> Option<&CodeNode> {
        match self {
            CodeNode::Leaf(_) => None,
            CodeNode::Branch(_, right) => Some(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, CodeNode::Leaf(_))
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            CodeNode::Leaf(_) => 1,
            CodeNode::Branch(left, right) => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Number of branches below (and including) this node.
    pub fn branch_count(&self) -> usize {
        match self {
            CodeNode::Leaf(_) => 0,
            CodeNode::Branch(left, right) => 1 + left.branch_count() + right.branch_count(),
        }
    }
}

/// A weighted subtree in the working list of [`build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Total occurrences of all symbols under `node`
    pub count: u64,
    pub node: CodeNode,
}

impl Occurrence {
    pub fn new(count: u64, node: CodeNode) -> Self {
        Self { count, node }
    }
}

/// Build the code tree for the given occurrences.
///
/// The input order is significant: it decides which of several equally
/// light items is merged first. A single occurrence is returned unchanged as
/// a lone leaf.
///
/// # Errors
/// `HuffmanError::EmptyInput` if `occurrences` is empty.
pub fn build(mut occurrences: Vec<Occurrence>) -> Result<CodeNode> {
    if occurrences.is_empty() {
        return Err(HuffmanError::EmptyInput.into());
    }

    while occurrences.len() > 1 {
        let lowest = lightest(&occurrences, None);
        let second = lightest(&occurrences, Some(lowest));

        let right = occurrences.remove(second);
        // `second` may sit before `lowest`, shifting it down by one.
        let lowest = if second < lowest { lowest - 1 } else { lowest };
        let left = occurrences.remove(lowest);

        let merged = Occurrence::new(
            left.count + right.count,
            CodeNode::branch(left.node, right.node),
        );
        occurrences.insert(lowest, merged);
    }

    let root = occurrences.swap_remove(0).node;
    log::trace!(
        "built code tree with {} leaves and {} branches",
        root.leaf_count(),
        root.branch_count()
    );
    Ok(root)
}

/// Index of the smallest count, earliest on ties, skipping `exclude`.
fn lightest(occurrences: &[Occurrence], exclude: Option<usize>) -> usize {
    let mut best: Option<usize> = None;
    for (i, occurrence) in occurrences.iter().enumerate() {
        if Some(i) == exclude {
            continue;
        }
        match best {
            Some(b) if occurrences[b].count <= occurrence.count => {}
            _ => best = Some(i),
        }
    }
    // Callers guarantee at least one candidate remains.
    best.unwrap_or(0)
}
