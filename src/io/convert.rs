//! Conversion from JSON file types to the native forest representation.

use crate::repr::{Forest, ForestValidationError, Node, Tree};

use super::json::{ForestFile, TreeRecord};

/// Error type for model file conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(
        "tree {tree}: array `{array}` has {len} entries but `is_leaf` has {n_nodes}"
    )]
    ArrayLenMismatch {
        tree: usize,
        array: &'static str,
        len: usize,
        n_nodes: usize,
    },
    #[error("invalid forest structure: {error:?}")]
    InvalidStructure { error: ForestValidationError },
}

impl ForestFile {
    /// Convert to a native [`Forest`], validating the node graph.
    ///
    /// A forest with zero trees converts successfully; rejecting it is the
    /// evaluator's concern, not the loader's.
    pub fn to_forest(&self) -> Result<Forest, ConvertError> {
        let mut forest = Forest::new(self.num_predictors);
        for (tree_idx, record) in self.trees.iter().enumerate() {
            forest.push_tree(record.to_tree(tree_idx)?);
        }
        forest
            .validate()
            .map_err(|error| ConvertError::InvalidStructure { error })?;
        Ok(forest)
    }
}

impl TreeRecord {
    fn to_tree(&self, tree_idx: usize) -> Result<Tree, ConvertError> {
        let n_nodes = self.is_leaf.len();
        let check = |array: &'static str, len: usize| {
            if len == n_nodes {
                Ok(())
            } else {
                Err(ConvertError::ArrayLenMismatch {
                    tree: tree_idx,
                    array,
                    len,
                    n_nodes,
                })
            }
        };
        check("predictor_indices", self.predictor_indices.len())?;
        check("boundaries_low", self.boundaries_low.len())?;
        check("boundaries_high", self.boundaries_high.len())?;
        check("less_children", self.less_children.len())?;
        check("mid_children", self.mid_children.len())?;
        check("greater_children", self.greater_children.len())?;
        check("leaf_values", self.leaf_values.len())?;

        let mut nodes = Vec::with_capacity(n_nodes);
        for i in 0..n_nodes {
            nodes.push(if self.is_leaf[i] {
                Node::Leaf {
                    value: self.leaf_values[i],
                }
            } else {
                Node::Split {
                    predictor: self.predictor_indices[i],
                    low: self.boundaries_low[i],
                    high: self.boundaries_high[i],
                    children: [
                        self.less_children[i],
                        self.mid_children[i],
                        self.greater_children[i],
                    ],
                }
            });
        }
        Ok(Tree::new(nodes))
    }
}
