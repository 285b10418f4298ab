//! The incremental forest evaluator.

use std::path::Path;

use crate::io::{self, LoadError};
use crate::repr::{Forest, TraversalError};

use super::listeners::{
    InputChangeListener, OutputChangeListener, SubscriberRegistry, SubscriptionId,
};

/// Error type for evaluator operations.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("evaluator used before initialize")]
    NotInitialized,
    #[error("predictor index {index} out of range for {num_predictors} predictors")]
    IndexOutOfRange { index: usize, num_predictors: usize },
    #[error("forest contains no trees")]
    EmptyForest,
    #[error("corrupt model: {0}")]
    CorruptModel(#[from] TraversalError),
    #[error("failed to load model: {0}")]
    ModelLoad(#[from] LoadError),
}

/// Model-dependent state, absent until [`ForestEvaluator::initialize`].
struct EvalState {
    forest: Forest,
    predictors: Vec<f64>,
    output: f64,
}

/// Incremental inference engine over a ternary forest.
///
/// Owns the predictor vector exclusively: callers mutate it one entry at a
/// time through [`on_input_change`](Self::on_input_change), which recomputes
/// the aggregate output by re-traversing every tree from scratch (the full
/// reevaluation per change is intentional, there is no per-tree caching)
/// and then notifies every subscription synchronously, in subscription
/// order.
///
/// Single-threaded by design: the whole recompute-and-notify pipeline runs
/// to completion on the caller's thread before `on_input_change` returns.
#[derive(Default)]
pub struct ForestEvaluator {
    state: Option<EvalState>,
    subscribers: SubscriberRegistry,
}

impl ForestEvaluator {
    /// Create an unconfigured evaluator.
    ///
    /// Every model-dependent operation fails with
    /// [`EvalError::NotInitialized`] until [`initialize`](Self::initialize)
    /// succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the forest model at `path` and make this evaluator operational.
    ///
    /// Allocates a zero-filled predictor vector of the forest's
    /// dimensionality and computes the initial aggregate output as a side
    /// effect; no subscribers are notified for this initial computation.
    ///
    /// Calling `initialize` again replaces the model, the predictor vector,
    /// and the stored output wholesale; subscriptions are model-independent
    /// and survive.
    pub fn initialize(&mut self, path: impl AsRef<Path>) -> Result<(), EvalError> {
        let forest = io::read_forest(path)?;
        self.install(forest)
    }

    /// Make this evaluator operational with an already-built forest.
    ///
    /// Same semantics as [`initialize`](Self::initialize) minus the file
    /// loading; the forest is trusted as-is, so callers constructing one in
    /// memory should run [`Forest::validate`] themselves.
    pub fn install(&mut self, forest: Forest) -> Result<(), EvalError> {
        let predictors = vec![0.0; forest.num_predictors()];
        let output = compute_aggregate(&forest, &predictors)?;
        self.state = Some(EvalState {
            forest,
            predictors,
            output,
        });
        Ok(())
    }

    /// The most recently computed aggregate output.
    pub fn output(&self) -> Result<f64, EvalError> {
        Ok(self.state()?.output)
    }

    /// Dimensionality of the predictor vector.
    pub fn num_predictors(&self) -> Result<usize, EvalError> {
        Ok(self.state()?.predictors.len())
    }

    /// Overwrite one predictor value, recompute, and notify.
    ///
    /// Recomputes the aggregate output by re-traversing every tree, then
    /// invokes every subscription's [`OutputChangeListener::on_output_change`]
    /// with the new value, in subscription order, before returning that same
    /// value to the caller.
    pub fn on_input_change(&mut self, index: usize, value: f64) -> Result<f64, EvalError> {
        let state = self.state.as_mut().ok_or(EvalError::NotInitialized)?;
        let num_predictors = state.predictors.len();
        if index >= num_predictors {
            return Err(EvalError::IndexOutOfRange {
                index,
                num_predictors,
            });
        }

        state.predictors[index] = value;
        let output = compute_aggregate(&state.forest, &state.predictors)?;
        state.output = output;

        self.subscribers.notify(output);
        Ok(output)
    }

    /// Subscribe a listener to output changes.
    ///
    /// No deduplication: subscribing the same listener twice means two
    /// notifications per change. Requires an initialized evaluator but
    /// never otherwise rejects a listener.
    pub fn subscribe(
        &mut self,
        listener: Box<dyn OutputChangeListener>,
    ) -> Result<SubscriptionId, EvalError> {
        if self.state.is_none() {
            return Err(EvalError::NotInitialized);
        }
        Ok(self.subscribers.subscribe(listener))
    }

    /// Remove a subscription; `false` for stale or unknown handles.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Number of live subscriptions.
    pub fn n_subscribers(&self) -> usize {
        self.subscribers.len()
    }

    fn state(&self) -> Result<&EvalState, EvalError> {
        self.state.as_ref().ok_or(EvalError::NotInitialized)
    }
}

impl InputChangeListener for ForestEvaluator {
    fn on_input_change(&mut self, index: usize, value: f64) -> Result<f64, EvalError> {
        ForestEvaluator::on_input_change(self, index, value)
    }
}

/// Unweighted mean of per-tree outputs for the current predictor vector.
fn compute_aggregate(forest: &Forest, predictors: &[f64]) -> Result<f64, EvalError> {
    let n_trees = forest.n_trees();
    if n_trees == 0 {
        return Err(EvalError::EmptyForest);
    }

    let mut total = 0.0;
    for tree in forest.trees() {
        total += tree.evaluate(predictors)?;
    }
    Ok(total / n_trees as f64)
}
