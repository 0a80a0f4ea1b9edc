use crate::store::AllocError;

use super::types::Side;

/// Reasons an insertion leaves the tree untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InsertError {
    #[error("key {key} is already present")]
    DuplicateKey { key: f64 },
    #[error("NaN keys cannot be ordered")]
    UnorderedKey,
    #[error(transparent)]
    Alloc(#[from] AllocError),
}

/// First red-black or linkage defect found by
/// [`check_invariants`](super::util::check_invariants).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("tree is empty")]
    EmptyTree,
    #[error("root node {node} (key {key}) has parent {parent}")]
    RootHasParent { node: u32, key: f64, parent: u32 },
    #[error("root node {node} (key {key}) is red")]
    RedRoot { node: u32, key: f64 },
    #[error("red node {node} (key {key}) has red parent {parent}")]
    RedParent { node: u32, key: f64, parent: u32 },
    #[error("red node {node} (key {key}) has red {side} child {child}")]
    RedChild {
        node: u32,
        key: f64,
        side: Side,
        child: u32,
    },
    #[error("node {node} (key {key}) is not a child of its parent {parent}")]
    NotChildOfParent { node: u32, key: f64, parent: u32 },
    #[error("node {node} (key {key}) is both children of its parent {parent}")]
    BothChildrenOfParent { node: u32, key: f64, parent: u32 },
    #[error("{side} child {child} of node {node} (key {key}) does not point back to it")]
    BrokenParentLink {
        node: u32,
        key: f64,
        side: Side,
        child: u32,
    },
    #[error("node {node} (key {key}) is out of order within its subtree")]
    KeyOrder { node: u32, key: f64 },
    #[error("black height differs below node {node} (key {key}): small side {small}, large side {large}")]
    BlackHeight {
        node: u32,
        key: f64,
        small: usize,
        large: usize,
    },
}

impl InvariantViolation {
    /// Arena index of the offending node, if the violation names one.
    pub fn node(&self) -> Option<u32> {
        match *self {
            InvariantViolation::EmptyTree => None,
            InvariantViolation::RootHasParent { node, .. }
            | InvariantViolation::RedRoot { node, .. }
            | InvariantViolation::RedParent { node, .. }
            | InvariantViolation::RedChild { node, .. }
            | InvariantViolation::NotChildOfParent { node, .. }
            | InvariantViolation::BothChildrenOfParent { node, .. }
            | InvariantViolation::BrokenParentLink { node, .. }
            | InvariantViolation::KeyOrder { node, .. }
            | InvariantViolation::BlackHeight { node, .. } => Some(node),
        }
    }
}
