//! Destructive conversion of a tree into a sorted doubly linked list.
//!
//! The list reuses the tree's own links: `small` points at the next smaller
//! key and `large` at the next larger key. No node is allocated or moved, but
//! the search structure is gone afterwards; the arena must not be handed to
//! any tree function again.

use log::error;

use crate::types::{KeyedNode, Node};
use crate::util::{get_large, get_small, set_large, set_p, set_small};

/// Both ends of a linearized tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortedLinks {
    /// Node with the largest key.
    pub head: u32,
    /// Node with the smallest key.
    pub tail: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinearizeError {
    #[error("cannot linearize an empty tree")]
    EmptyTree,
}

/// Defects found by [`check_sorted_list`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListViolation {
    #[error("walking up: node {next} (key {next_key}) does not follow node {node} (key {key})")]
    AscendingOrder {
        node: u32,
        key: f64,
        next: u32,
        next_key: f64,
    },
    #[error("walking up: node {next} does not link back down to node {node}")]
    AscendingBackLink { node: u32, next: u32 },
    #[error("walking up from the tail ended at node {end} instead of head {head}")]
    AscendingEnd { end: u32, head: u32 },
    #[error("walking down: node {next} (key {next_key}) does not precede node {node} (key {key})")]
    DescendingOrder {
        node: u32,
        key: f64,
        next: u32,
        next_key: f64,
    },
    #[error("walking down: node {next} does not link back up to node {node}")]
    DescendingBackLink { node: u32, next: u32 },
    #[error("walking down from the head ended at node {end} instead of tail {tail}")]
    DescendingEnd { end: u32, tail: u32 },
    #[error("walking up visited {ascending} nodes, walking down {descending}")]
    LengthMismatch { ascending: usize, descending: usize },
    #[error("list holds {walked} nodes, expected {expected}")]
    CountMismatch { walked: usize, expected: usize },
}

/// Turns the tree under `root` into a sorted doubly linked list.
///
/// Nodes are visited in reverse order (large subtree, node, small subtree)
/// and each one is spliced in below the current minimum. Every node's parent
/// link is cleared; `head.large` and `tail.small` end up `None`.
pub fn convert_to_sorted_linked<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
) -> Result<SortedLinks, LinearizeError> {
    let Some(root) = root else {
        return Err(LinearizeError::EmptyTree);
    };
    Ok(splice(arena, root, None))
}

fn splice<N: Node>(arena: &mut [N], node: u32, links: Option<SortedLinks>) -> SortedLinks {
    let small = get_small(arena, node);
    let large = get_large(arena, node);

    let links = match large {
        Some(large) => Some(splice(arena, large, links)),
        None => links,
    };

    set_p(arena, node, None);
    set_small(arena, node, None);
    let links = match links {
        Some(SortedLinks { head, tail }) => {
            set_large(arena, node, Some(tail));
            set_small(arena, tail, Some(node));
            SortedLinks { head, tail: node }
        }
        None => {
            set_large(arena, node, None);
            SortedLinks {
                head: node,
                tail: node,
            }
        }
    };

    match small {
        Some(small) => splice(arena, small, Some(links)),
        None => links,
    }
}

/// Walks the list both ways and returns its length.
///
/// Keys must strictly increase from `tail` to `head`, every link must have a
/// matching back-link, each walk must end at the opposite end, and both walks
/// must count the same nodes.
pub fn check_sorted_list<N: KeyedNode>(arena: &[N], links: SortedLinks) -> Result<usize, ListViolation> {
    check_links(arena, links).map_err(|violation| {
        error!("sorted list check failed: {violation}");
        violation
    })
}

fn check_links<N: KeyedNode>(arena: &[N], links: SortedLinks) -> Result<usize, ListViolation> {
    let SortedLinks { head, tail } = links;

    let mut ascending = 1;
    let mut node = tail;
    while let Some(next) = get_large(arena, node) {
        let key = arena[node as usize].key();
        let next_key = arena[next as usize].key();
        if !(next_key > key) {
            return Err(ListViolation::AscendingOrder {
                node,
                key,
                next,
                next_key,
            });
        }
        if get_small(arena, next) != Some(node) {
            return Err(ListViolation::AscendingBackLink { node, next });
        }
        ascending += 1;
        node = next;
    }
    if node != head {
        return Err(ListViolation::AscendingEnd { end: node, head });
    }

    let mut descending = 1;
    let mut node = head;
    while let Some(next) = get_small(arena, node) {
        let key = arena[node as usize].key();
        let next_key = arena[next as usize].key();
        if !(next_key < key) {
            return Err(ListViolation::DescendingOrder {
                node,
                key,
                next,
                next_key,
            });
        }
        if get_large(arena, next) != Some(node) {
            return Err(ListViolation::DescendingBackLink { node, next });
        }
        descending += 1;
        node = next;
    }
    if node != tail {
        return Err(ListViolation::DescendingEnd { end: node, tail });
    }

    if ascending != descending {
        return Err(ListViolation::LengthMismatch {
            ascending,
            descending,
        });
    }
    Ok(ascending)
}
