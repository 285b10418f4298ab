//! Canonical forest representation (collection of trees).

use super::tree::{Tree, TreeValidationError};

/// Structural validation errors for [`Forest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForestValidationError {
    InvalidTree {
        tree_idx: usize,
        error: TreeValidationError,
    },
}

/// An ordered sequence of trees plus the predictor-vector dimensionality.
///
/// Immutable once constructed by the loader; tree order is irrelevant to
/// the result since the aggregate output is an unweighted mean.
#[derive(Debug, Clone, PartialEq)]
pub struct Forest {
    trees: Vec<Tree>,
    num_predictors: usize,
}

impl Forest {
    /// Create an empty forest over `num_predictors` predictors.
    pub fn new(num_predictors: usize) -> Self {
        Self {
            trees: Vec::new(),
            num_predictors,
        }
    }

    /// Add a tree to the forest.
    pub fn push_tree(&mut self, tree: Tree) {
        self.trees.push(tree);
    }

    /// Number of trees.
    #[inline]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Dimensionality of the predictor vector.
    #[inline]
    pub fn num_predictors(&self) -> usize {
        self.num_predictors
    }

    /// Get a reference to a specific tree.
    #[inline]
    pub fn tree(&self, idx: usize) -> &Tree {
        &self.trees[idx]
    }

    /// Iterate over trees.
    pub fn trees(&self) -> impl Iterator<Item = &Tree> {
        self.trees.iter()
    }

    /// Validate structural invariants for every tree in this forest.
    ///
    /// The loader runs this before a forest reaches the evaluator, so a
    /// malformed model file fails at load time rather than mid-evaluation.
    pub fn validate(&self) -> Result<(), ForestValidationError> {
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.num_predictors)
                .map_err(|error| ForestValidationError::InvalidTree { tree_idx: i, error })?;
        }
        Ok(())
    }
}
