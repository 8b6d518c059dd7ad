use log::{debug, info, warn};

use super::majority::most_frequent;
use super::split::find_best_split;
use super::{DTNode, DecisionTree, NodeId};
use crate::dataset::Dataset;
use crate::error::DecTreeError;

/// Majority ratio above which a subset becomes a leaf.
pub const DEFAULT_THRESHOLD_RATIO: f64 = 0.9;

/// Parameters controlling tree growth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeConfig {
    /// A subset whose majority label makes up more than this fraction of its
    /// items is not split any further.
    pub threshold_ratio: f64,
}

impl TreeConfig {
    pub fn new() -> Self {
        Self {
            threshold_ratio: DEFAULT_THRESHOLD_RATIO,
        }
    }

    /// Sets the stopping threshold ratio.
    ///
    /// # Arguments
    ///
    /// * `ratio` - Must lie in `(0, 1]`; checked by `validate`.
    pub fn with_threshold_ratio(mut self, ratio: f64) -> Self {
        self.threshold_ratio = ratio;
        self
    }

    /// # Errors
    ///
    /// Returns `DecTreeError::InvalidThreshold` unless `0 < threshold_ratio <= 1`.
    pub fn validate(&self) -> Result<(), DecTreeError> {
        let r = self.threshold_ratio;
        if r.is_nan() || r <= 0.0 || r > 1.0 {
            return Err(DecTreeError::InvalidThreshold(r));
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// A subset waiting to be turned into a subtree, and where to attach it.
struct PendingNode {
    subset: Vec<usize>,
    parent: Option<(NodeId, Side)>,
    depth: usize,
}

/// Builds the subtree for `subset` of `dataset`.
///
/// Each step takes the majority label of its subset; if that label covers
/// more than `config.threshold_ratio` of the items (or all of them) the step
/// yields a leaf. Otherwise the subset is split on `find_best_split` into a
/// left part (pixel < 128) and a right part, each keeping the original
/// relative order, and every non-empty part becomes a child built the same
/// way. Growth is driven by an explicit depth-first work stack, so deep
/// trees do not consume native stack.
///
/// # Errors
///
/// * `DecTreeError::InvalidThreshold` if the config is invalid.
/// * `DecTreeError::EmptySubset` if `subset` is empty.
/// * `DecTreeError::IndexOutOfBounds` if an index exceeds the dataset length.
pub fn build_subtree<D: Dataset + ?Sized>(
    dataset: &D,
    subset: Vec<usize>,
    config: &TreeConfig,
) -> Result<DecisionTree, DecTreeError> {
    config.validate()?;
    if subset.is_empty() {
        return Err(DecTreeError::EmptySubset {
            operation: "build_subtree".to_string(),
        });
    }
    if let Some(&index) = subset.iter().find(|&&i| i >= dataset.len()) {
        return Err(DecTreeError::IndexOutOfBounds {
            index,
            len: dataset.len(),
        });
    }

    let mut tree = DecisionTree::with_capacity(2 * subset.len().min(1024));
    let mut stack = vec![PendingNode {
        subset,
        parent: None,
        depth: 0,
    }];

    while let Some(PendingNode { subset, parent, depth }) = stack.pop() {
        let m = subset.len();
        let (label, count) = most_frequent(dataset, &subset)?;
        let ratio = count as f64 / m as f64;

        let split = if ratio > config.threshold_ratio || count == m {
            None
        } else {
            let pixel = find_best_split(dataset, &subset);
            if pixel.is_none() {
                warn!(
                    "No finite-impurity split for {} items at depth {}; using majority label {}",
                    m, depth, label
                );
            }
            pixel
        };

        let id = match split {
            None => {
                debug!("Leaf at depth {}: label {} ({}/{} items)", depth, label, count, m);
                tree.push(DTNode::Leaf { label })
            }
            Some(pixel) => {
                let (left, right): (Vec<usize>, Vec<usize>) = subset
                    .iter()
                    .copied()
                    .partition(|&idx| dataset.image(idx).goes_left(pixel));
                debug!(
                    "Split at depth {} on pixel {}: {} left, {} right",
                    depth,
                    pixel,
                    left.len(),
                    right.len()
                );
                let id = tree.push(DTNode::Split {
                    pixel,
                    majority: label,
                    left: None,
                    right: None,
                });
                // Right is pushed first so the left partition is built first.
                for (part, side) in [(right, Side::Right), (left, Side::Left)] {
                    if !part.is_empty() {
                        stack.push(PendingNode {
                            subset: part,
                            parent: Some((id, side)),
                            depth: depth + 1,
                        });
                    }
                }
                id
            }
        };
        // `subset` is dropped here; the partitions now belong to the stack.

        match parent {
            None => tree.root = id,
            Some((parent_id, side)) => {
                if let DTNode::Split { left, right, .. } = tree.node_mut(parent_id) {
                    match side {
                        Side::Left => *left = Some(id),
                        Side::Right => *right = Some(id),
                    }
                }
            }
        }
    }

    Ok(tree)
}

/// Builds a decision tree over every item of `dataset`.
///
/// # Errors
///
/// Returns `DecTreeError::EmptyDataset` for an empty dataset, and any error
/// of `build_subtree`.
pub fn build_dec_tree<D: Dataset + ?Sized>(
    dataset: &D,
    config: &TreeConfig,
) -> Result<DecisionTree, DecTreeError> {
    if dataset.is_empty() {
        return Err(DecTreeError::EmptyDataset);
    }
    let indices: Vec<usize> = (0..dataset.len()).collect();
    let tree = build_subtree(dataset, indices, config)?;
    info!(
        "Built decision tree over {} items: {} nodes, {} leaves, depth {}",
        dataset.len(),
        tree.node_count(),
        tree.leaf_count(),
        tree.depth()
    );
    Ok(tree)
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
