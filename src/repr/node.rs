//! Tree node types.

/// Canonical node identifier: an index into the owning tree's node array.
pub type NodeId = u32;

/// A single decision-tree vertex.
///
/// Either a leaf carrying the tree's output for samples that reach it, or a
/// ternary split routing evaluation into one of three children depending on
/// where a predictor value falls relative to the closed interval
/// `[low, high]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Terminal node with a fixed predicted value.
    Leaf { value: f64 },
    /// Ternary split on one predictor against `[low, high]`.
    Split {
        /// Index of the predictor this split reads.
        predictor: u32,
        /// Lower interval boundary, inclusive for the middle branch.
        low: f64,
        /// Upper interval boundary, inclusive for the middle branch.
        high: f64,
        /// Child node indices in `[less, mid, greater]` order.
        children: [NodeId; 3],
    },
}

impl Node {
    /// Check if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}
