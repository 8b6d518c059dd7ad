//! Binary decision tree over 28x28 images.
//!
//! Every internal node tests a single pixel against `PIXEL_THRESHOLD`:
//! intensities below it go left, the rest go right. Splits are chosen by
//! minimal weighted Gini impurity and growth stops once the majority label
//! of a subset exceeds the configured threshold ratio.
//!
//! ```rust
//! use dectree_core::tree::{build_dec_tree, TreeConfig};
//! use dectree_core::utils::testing::{dataset_from, image_lit};
//!
//! let dataset = dataset_from(vec![
//!     (image_lit(&[]), 0),
//!     (image_lit(&[0]), 1),
//! ]);
//! let tree = build_dec_tree(&dataset, &TreeConfig::default()).expect("build");
//! assert_eq!(tree.classify(&image_lit(&[0])), 1);
//! ```

pub mod builder;
pub mod classify;
pub mod impurity;
pub mod majority;
pub mod split;

pub use builder::{build_dec_tree, build_subtree, TreeConfig, DEFAULT_THRESHOLD_RATIO};
pub use classify::Evaluation;
pub use impurity::gini_impurity;
pub use majority::most_frequent;
pub use split::find_best_split;

/// Position of a node inside a `DecisionTree` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the decision tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DTNode {
    /// Terminal node carrying the predicted label.
    Leaf { label: u8 },
    /// Internal node splitting on `pixel`.
    ///
    /// A child is `None` only when its side of the partition was empty.
    /// `majority` is the most frequent label among the items that reached
    /// this node.
    Split {
        pixel: usize,
        majority: u8,
        left: Option<NodeId>,
        right: Option<NodeId>,
    },
}

impl DTNode {
    /// Split pixel of an internal node, `None` for a leaf.
    pub fn pixel(&self) -> Option<usize> {
        match self {
            DTNode::Split { pixel, .. } => Some(*pixel),
            DTNode::Leaf { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, DTNode::Leaf { .. })
    }

    pub fn left(&self) -> Option<NodeId> {
        match self {
            DTNode::Split { left, .. } => *left,
            DTNode::Leaf { .. } => None,
        }
    }

    pub fn right(&self) -> Option<NodeId> {
        match self {
            DTNode::Split { right, .. } => *right,
            DTNode::Leaf { .. } => None,
        }
    }
}

/// A decision tree stored as an arena of nodes.
///
/// Nodes own no heap memory of their own, so dropping the tree releases the
/// whole structure at once regardless of its depth.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    nodes: Vec<DTNode>,
    root: NodeId,
}

impl DecisionTree {
    /// Tree made of a single leaf.
    pub fn leaf(label: u8) -> Self {
        Self {
            nodes: vec![DTNode::Leaf { label }],
            root: NodeId(0),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: NodeId(0),
        }
    }

    pub(crate) fn push(&mut self, node: DTNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut DTNode {
        &mut self.nodes[id.0]
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &DTNode {
        &self.nodes[id.0]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Number of edges on the longest root-to-leaf path (a lone leaf has depth 0).
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = self.node(id);
            stack.extend(node.left().map(|c| (c, depth + 1)));
            stack.extend(node.right().map(|c| (c, depth + 1)));
        }
        max_depth
    }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tests;
