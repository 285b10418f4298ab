//! Inference: the incremental evaluator and its notification protocol.
//!
//! [`ForestEvaluator`] is the reactive core: it owns the predictor vector,
//! recomputes the forest's mean output on every input change, and fans the
//! new output out to [`OutputChangeListener`] subscriptions synchronously,
//! in subscription order.

pub mod evaluator;
pub mod listeners;

pub use evaluator::{EvalError, ForestEvaluator};
pub use listeners::{
    InputChangeListener, OutputChangeListener, SubscriberRegistry, SubscriptionId,
};
