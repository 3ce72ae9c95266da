//! The clue index: every clue collected so far, ordered by text
//!
//! An unbalanced binary search tree in the classic textbook shape: no
//! removal, no balancing, exact duplicates silently discarded. The in-order
//! walk *is* the alphabetical clue report.

use super::ClueText;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct ClueNode {
    text: ClueText,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

/// The collected clues, keyed by their own text.
#[derive(Debug, Clone, Default)]
pub struct ClueIndex {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clue at its ordered position.
    ///
    /// Returns `false` and leaves the tree untouched when the exact text is
    /// already present; comparison routes only on strictly-less and
    /// strictly-greater, so equality falls through to the discard.
    pub fn insert(&mut self, text: ClueText) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match text.cmp(&node.text) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *slot = Some(Box::new(ClueNode {
            text,
            left: None,
            right: None,
        }));
        self.len += 1;
        true
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            match text.cmp(current.text.as_str()) {
                Ordering::Less => node = current.left.as_deref(),
                Ordering::Greater => node = current.right.as_deref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Walk the clues in ascending order.
    ///
    /// The walk is lazy (nodes are visited as the iterator advances) and
    /// restartable: calling `iter` again starts a fresh pass.
    pub fn iter(&self) -> Clues<'_> {
        let mut clues = Clues { stack: Vec::new() };
        clues.descend_left(self.root.as_deref());
        clues
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every node. Safe on an already-empty index.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = Clues<'a>;

    fn into_iter(self) -> Clues<'a> {
        self.iter()
    }
}

/// Lazy in-order iterator over a [`ClueIndex`].
///
/// Keeps the pending ancestors on an explicit stack, so iteration cost is
/// paid per step rather than up front.
#[derive(Debug)]
pub struct Clues<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> Clues<'a> {
    fn descend_left(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for Clues<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        Some(node.text.as_str())
    }
}
