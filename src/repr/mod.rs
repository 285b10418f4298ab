//! Canonical forest representation.

pub mod forest;
pub mod node;
pub mod tree;

pub use forest::{Forest, ForestValidationError};
pub use node::{Node, NodeId};
pub use tree::{TraversalError, Tree, TreeValidationError};
