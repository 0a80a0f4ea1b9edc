use std::cmp::Ordering;

use log::{debug, error, trace};

use crate::util::{get_large, get_p, get_small, replace_child, set_large, set_p, set_small};

use super::error::{InsertError, InvariantViolation};
use super::types::{Color, RbNodeLike, Side};

#[path = "util/print.rs"]
mod print_impl;

pub use print_impl::print;

#[inline]
fn is_black<N: RbNodeLike>(arena: &[N], i: u32) -> bool {
    arena[i as usize].is_black()
}

#[inline]
fn set_color<N: RbNodeLike>(arena: &mut [N], i: u32, color: Color) {
    arena[i as usize].set_color(color);
}

#[inline]
fn key_of<N: RbNodeLike>(arena: &[N], i: u32) -> f64 {
    arena[i as usize].key()
}

/// Inserts node `n` (key already set) into the tree under `root`.
///
/// Returns the root after rebalancing, which differs from `root` when a
/// rotation reached the top of the tree. On error nothing is modified and the
/// caller still owns `n`.
pub fn insert<N: RbNodeLike>(arena: &mut [N], root: Option<u32>, n: u32) -> Result<u32, InsertError> {
    let key = key_of(arena, n);
    if key.is_nan() {
        debug!("rejected NaN key for node {n}");
        return Err(InsertError::UnorderedKey);
    }

    let Some(root) = root else {
        set_p(arena, n, None);
        set_small(arena, n, None);
        set_large(arena, n, None);
        set_color(arena, n, Color::Black);
        return Ok(n);
    };

    let mut curr = root;
    loop {
        let (next, side) = match key.partial_cmp(&key_of(arena, curr)) {
            Some(Ordering::Less) => (get_small(arena, curr), Side::Small),
            Some(Ordering::Greater) => (get_large(arena, curr), Side::Large),
            _ => {
                debug!("rejected duplicate key {key} (held by node {curr})");
                return Err(InsertError::DuplicateKey { key });
            }
        };
        match next {
            Some(next) => curr = next,
            None => {
                return Ok(match side {
                    Side::Small => insert_small(arena, root, n, curr),
                    Side::Large => insert_large(arena, root, n, curr),
                });
            }
        }
    }
}

/// Attaches `n` as the small child of `p` and rebalances.
///
/// `p` must have no small child and `n`'s key must fit there.
pub fn insert_small<N: RbNodeLike>(arena: &mut [N], root: u32, n: u32, p: u32) -> u32 {
    attach(arena, n, p);
    set_small(arena, p, Some(n));
    rebalance(arena, root, n)
}

/// Attaches `n` as the large child of `p` and rebalances.
///
/// `p` must have no large child and `n`'s key must fit there.
pub fn insert_large<N: RbNodeLike>(arena: &mut [N], root: u32, n: u32, p: u32) -> u32 {
    attach(arena, n, p);
    set_large(arena, p, Some(n));
    rebalance(arena, root, n)
}

fn attach<N: RbNodeLike>(arena: &mut [N], n: u32, p: u32) {
    set_p(arena, n, Some(p));
    set_small(arena, n, None);
    set_large(arena, n, None);
    set_color(arena, n, Color::Red);
}

/// Restores the red-black rules above the red node `n`.
fn rebalance<N: RbNodeLike>(arena: &mut [N], root: u32, mut n: u32) -> u32 {
    loop {
        let Some(p) = get_p(arena, n) else {
            // Recoloring climbed to the root.
            set_color(arena, n, Color::Black);
            return n;
        };
        if is_black(arena, p) {
            return root;
        }
        let Some(g) = get_p(arena, p) else {
            // Only reachable when the caller handed in a red root.
            set_color(arena, p, Color::Black);
            return root;
        };

        let p_side = side_of(arena, g, p);
        let u = match p_side {
            Side::Small => get_large(arena, g),
            Side::Large => get_small(arena, g),
        };

        if let Some(u) = u.filter(|&u| !is_black(arena, u)) {
            trace!("recolor at node {g}: parent {p} and uncle {u} turn black");
            set_color(arena, p, Color::Black);
            set_color(arena, u, Color::Black);
            set_color(arena, g, Color::Red);
            n = g;
            continue;
        }

        let n_side = side_of(arena, p, n);
        let top = if n_side == p_side {
            lift(arena, p);
            p
        } else {
            lift(arena, n);
            lift(arena, n);
            n
        };
        trace!("rotated node {top} into the place of {g}");
        set_color(arena, top, Color::Black);
        set_color(arena, g, Color::Red);

        return if get_p(arena, top).is_none() { top } else { root };
    }
}

fn side_of<N: RbNodeLike>(arena: &[N], p: u32, c: u32) -> Side {
    if get_small(arena, p) == Some(c) {
        Side::Small
    } else {
        Side::Large
    }
}

/// Single rotation: `c` takes the place of its parent `n`, and `n` becomes
/// `c`'s child on the other side. The subtree of `c` lying between the two
/// keys moves over to `n`.
fn lift<N: RbNodeLike>(arena: &mut [N], c: u32) {
    let Some(n) = get_p(arena, c) else {
        return;
    };
    let up = get_p(arena, n);

    let between = match side_of(arena, n, c) {
        Side::Small => {
            let between = get_large(arena, c);
            set_small(arena, n, between);
            set_large(arena, c, Some(n));
            between
        }
        Side::Large => {
            let between = get_small(arena, c);
            set_large(arena, n, between);
            set_small(arena, c, Some(n));
            between
        }
    };
    if let Some(b) = between {
        set_p(arena, b, Some(n));
    }

    set_p(arena, n, Some(c));
    set_p(arena, c, up);
    if let Some(up) = up {
        replace_child(arena, up, n, c);
    }
}

/// Index of the node holding exactly `key`.
pub fn find<N: RbNodeLike>(arena: &[N], root: Option<u32>, key: f64) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        let k = key_of(arena, i);
        if k == key {
            return Some(i);
        }
        curr = if key > k {
            get_large(arena, i)
        } else {
            get_small(arena, i)
        };
    }
    None
}

/// Payload stored under exactly `key`.
pub fn lookup<N: RbNodeLike>(arena: &[N], root: Option<u32>, key: f64) -> Option<&N::Payload> {
    find(arena, root, key).and_then(|i| arena[i as usize].payload())
}

/// Validates the red-black rules and parent/child links of the whole tree.
///
/// An empty tree is reported as [`InvariantViolation::EmptyTree`]. The first
/// violation found is logged and returned.
pub fn check_invariants<N: RbNodeLike>(arena: &[N], root: Option<u32>) -> Result<(), InvariantViolation> {
    check_tree(arena, root).map_err(|violation| {
        error!("red-black check failed: {violation}");
        violation
    })
}

fn check_tree<N: RbNodeLike>(arena: &[N], root: Option<u32>) -> Result<(), InvariantViolation> {
    let Some(root) = root else {
        return Err(InvariantViolation::EmptyTree);
    };

    let key = key_of(arena, root);
    if let Some(parent) = get_p(arena, root) {
        return Err(InvariantViolation::RootHasParent {
            node: root,
            key,
            parent,
        });
    }
    if !is_black(arena, root) {
        return Err(InvariantViolation::RedRoot { node: root, key });
    }

    black_height(arena, root, None, None).map(|_| ())
}

/// Checks `node` and its subtree; keys must lie strictly between `lo` and
/// `hi`. Returns the subtree's black height.
fn black_height<N: RbNodeLike>(
    arena: &[N],
    node: u32,
    lo: Option<f64>,
    hi: Option<f64>,
) -> Result<usize, InvariantViolation> {
    let key = key_of(arena, node);
    let s = get_small(arena, node);
    let l = get_large(arena, node);

    if let Some(parent) = get_p(arena, node) {
        let is_small = get_small(arena, parent) == Some(node);
        let is_large = get_large(arena, parent) == Some(node);
        if is_small && is_large {
            return Err(InvariantViolation::BothChildrenOfParent { node, key, parent });
        }
        if !is_small && !is_large {
            return Err(InvariantViolation::NotChildOfParent { node, key, parent });
        }
        if !is_black(arena, node) && !is_black(arena, parent) {
            return Err(InvariantViolation::RedParent { node, key, parent });
        }
    }

    for (side, child) in [(Side::Small, s), (Side::Large, l)] {
        let Some(child) = child else {
            continue;
        };
        if get_p(arena, child) != Some(node) {
            return Err(InvariantViolation::BrokenParentLink {
                node,
                key,
                side,
                child,
            });
        }
        if !is_black(arena, node) && !is_black(arena, child) {
            return Err(InvariantViolation::RedChild {
                node,
                key,
                side,
                child,
            });
        }
    }

    let above_lo = lo.map(|lo| key > lo).unwrap_or(true);
    let below_hi = hi.map(|hi| key < hi).unwrap_or(true);
    if key.is_nan() || !above_lo || !below_hi {
        return Err(InvariantViolation::KeyOrder { node, key });
    }

    let sh = match s {
        Some(s) => black_height(arena, s, lo, Some(key))?,
        None => 0,
    };
    let lh = match l {
        Some(l) => black_height(arena, l, Some(key), hi)?,
        None => 0,
    };
    if sh != lh {
        return Err(InvariantViolation::BlackHeight {
            node,
            key,
            small: sh,
            large: lh,
        });
    }

    Ok(sh + usize::from(is_black(arena, node)))
}
