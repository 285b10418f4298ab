//! JSON model file types.
//!
//! These are foreign types used only for parsing; conversion to the native
//! representation lives in [`super::convert`].

use serde::Deserialize;

use crate::repr::NodeId;

/// Top-level model file: predictor count plus one record per tree.
#[derive(Debug, Clone, Deserialize)]
pub struct ForestFile {
    pub num_predictors: usize,
    pub trees: Vec<TreeRecord>,
}

/// Per-tree parallel arrays, one entry per node, root at index 0.
///
/// All eight arrays must have the same length. For leaf nodes only
/// `leaf_values` is meaningful; for split nodes everything but
/// `leaf_values` is. The unused entries are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeRecord {
    pub is_leaf: Vec<bool>,
    pub predictor_indices: Vec<u32>,
    pub boundaries_low: Vec<f64>,
    pub boundaries_high: Vec<f64>,
    pub less_children: Vec<NodeId>,
    pub mid_children: Vec<NodeId>,
    pub greater_children: Vec<NodeId>,
    pub leaf_values: Vec<f64>,
}
