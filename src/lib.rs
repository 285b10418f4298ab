//! ternary-forest: incremental inference over ternary-split decision tree
//! ensembles.
//!
//! A ternary forest is an ensemble of decision trees whose internal nodes
//! route evaluation three ways: below, inside, or above a closed interval
//! `[low, high]` on one predictor. The forest's output is the unweighted
//! mean of its trees' leaf values.
//!
//! # Key Types
//!
//! - [`ForestEvaluator`] - Holds the current predictor vector, recomputes
//!   the forest output on every input change, and notifies subscribers
//! - [`Forest`] / [`Tree`] / [`Node`] - Canonical in-memory model
//! - [`OutputChangeListener`] - Hook invoked with every new output
//! - [`read_forest`] - Load and validate a JSON model file
//!
//! # Usage
//!
//! Create an evaluator with [`ForestEvaluator::new`], load a model with
//! [`ForestEvaluator::initialize`], then drive it with
//! [`ForestEvaluator::on_input_change`]. Every change recomputes the full
//! forest and fans the new output out to subscribers in subscription order.

pub mod inference;
pub mod io;
pub mod repr;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// The evaluator and its notification protocol
pub use inference::{
    EvalError, ForestEvaluator, InputChangeListener, OutputChangeListener, SubscriptionId,
};

// Model loading
pub use io::{read_forest, LoadError};

// Canonical model representation
pub use repr::{Forest, Node, NodeId, Tree};
