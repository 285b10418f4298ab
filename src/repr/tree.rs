//! Tree storage, ternary traversal, and structural validation.

use super::node::{Node, NodeId};

/// Data-integrity faults detected while walking a tree at evaluation time.
///
/// These are runtime guards for forests that bypassed [`Tree::validate`]
/// (e.g. built in memory): traversal never indexes out of bounds and never
/// loops forever, it reports instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    #[error("node index {node} out of bounds for tree with {n_nodes} nodes")]
    NodeOutOfBounds { node: NodeId, n_nodes: usize },
    #[error("predictor index {predictor} out of bounds for {num_predictors} predictors")]
    PredictorOutOfBounds { predictor: u32, num_predictors: usize },
    #[error("traversal exceeded {n_nodes} steps, node graph contains a cycle")]
    CycleDetected { n_nodes: usize },
}

/// Structural validation errors for [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeValidationError {
    /// A child pointer references an out-of-bounds node.
    ChildOutOfBounds {
        node: NodeId,
        side: &'static str,
        child: NodeId,
        n_nodes: usize,
    },
    /// A split reads a predictor the forest does not have.
    PredictorOutOfBounds {
        node: NodeId,
        predictor: u32,
        num_predictors: usize,
    },
    /// A node references itself as a child.
    SelfLoop { node: NodeId },
    /// A node was reached by more than one path (DAG) or due to a cycle.
    DuplicateVisit { node: NodeId },
    /// A cycle was detected during traversal.
    CycleDetected { node: NodeId },
    /// A node exists in storage but is unreachable from the root.
    UnreachableNode { node: NodeId },
}

/// An ordered, indexable sequence of nodes with the root at index 0.
///
/// A tree with zero nodes is explicitly empty: valid, and contributing an
/// output of 0 regardless of the predictor vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Box<[Node]>,
}

impl Tree {
    /// Create a tree from its node array. Index 0 is the root.
    ///
    /// No structural checks happen here; call [`Tree::validate`] (or load
    /// through [`crate::io::read_forest`], which does) before trusting the
    /// node graph.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes: nodes.into_boxed_slice(),
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether this is an explicitly empty tree.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Read access to a node by index.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    /// Evaluate this tree against the given predictor vector.
    ///
    /// Returns 0 for an empty tree. Otherwise walks from the root: at each
    /// split the predictor value `v` routes to the less child if `v < low`,
    /// to the greater child if `v > high`, and to the mid child for the
    /// closed interval `low <= v <= high` (boundary values take the middle
    /// branch).
    ///
    /// The walk is bounded by the node count: an acyclic path visits each
    /// node at most once, so running out of steps means the graph has a
    /// cycle and is reported as [`TraversalError::CycleDetected`] rather
    /// than looping forever.
    pub fn evaluate(&self, predictors: &[f64]) -> Result<f64, TraversalError> {
        if self.nodes.is_empty() {
            return Ok(0.0);
        }

        let n_nodes = self.nodes.len();
        let mut node_id: NodeId = 0;

        for _ in 0..n_nodes {
            let node = self
                .nodes
                .get(node_id as usize)
                .ok_or(TraversalError::NodeOutOfBounds {
                    node: node_id,
                    n_nodes,
                })?;

            match *node {
                Node::Leaf { value } => return Ok(value),
                Node::Split {
                    predictor,
                    low,
                    high,
                    children,
                } => {
                    let v = *predictors.get(predictor as usize).ok_or(
                        TraversalError::PredictorOutOfBounds {
                            predictor,
                            num_predictors: predictors.len(),
                        },
                    )?;

                    node_id = if v < low {
                        children[0]
                    } else if v > high {
                        children[2]
                    } else {
                        children[1]
                    };
                }
            }
        }

        Err(TraversalError::CycleDetected { n_nodes })
    }

    /// Validate basic structural invariants for this tree.
    ///
    /// Checks child and predictor indices and walks the node graph from the
    /// root, rejecting self-loops, cycles, shared nodes, and unreachable
    /// nodes. An empty tree is valid.
    pub fn validate(&self, num_predictors: usize) -> Result<(), TreeValidationError> {
        let n_nodes = self.nodes.len();
        if n_nodes == 0 {
            return Ok(());
        }

        // Iterative DFS with color marking.
        // 0 = unvisited, 1 = visiting, 2 = done
        let mut color = vec![0u8; n_nodes];
        let mut stack: Vec<(NodeId, u8)> = vec![(0, 0)];

        while let Some((node, phase)) = stack.pop() {
            let node_usize = node as usize;

            match phase {
                0 => {
                    match color[node_usize] {
                        0 => {}
                        1 => return Err(TreeValidationError::CycleDetected { node }),
                        2 => return Err(TreeValidationError::DuplicateVisit { node }),
                        _ => unreachable!(),
                    }

                    color[node_usize] = 1;
                    stack.push((node, 1));

                    if let Node::Split {
                        predictor,
                        children,
                        ..
                    } = self.nodes[node_usize]
                    {
                        if predictor as usize >= num_predictors {
                            return Err(TreeValidationError::PredictorOutOfBounds {
                                node,
                                predictor,
                                num_predictors,
                            });
                        }

                        for (side, child) in
                            ["less", "mid", "greater"].into_iter().zip(children)
                        {
                            if child == node {
                                return Err(TreeValidationError::SelfLoop { node });
                            }
                            if child as usize >= n_nodes {
                                return Err(TreeValidationError::ChildOutOfBounds {
                                    node,
                                    side,
                                    child,
                                    n_nodes,
                                });
                            }
                        }

                        // Visit children; pushed in reverse so the less
                        // branch pops first.
                        for &child in children.iter().rev() {
                            stack.push((child, 0));
                        }
                    }
                }
                1 => {
                    color[node_usize] = 2;
                }
                _ => unreachable!(),
            }
        }

        for (i, &c) in color.iter().enumerate() {
            if c == 0 {
                return Err(TreeValidationError::UnreachableNode { node: i as NodeId });
            }
        }

        Ok(())
    }
}
