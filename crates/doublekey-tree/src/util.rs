//! Structural (p / small / large) helpers shared by the tree and list code.

use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_small<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].small()
}

#[inline]
pub(crate) fn get_large<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].large()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_small<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_small(v);
}

#[inline]
pub(crate) fn set_large<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_large(v);
}

/// Points whichever child link of `p` held `old` at `new` instead.
#[inline]
pub(crate) fn replace_child<N: Node>(arena: &mut [N], p: u32, old: u32, new: u32) {
    if get_small(arena, p) == Some(old) {
        set_small(arena, p, Some(new));
    } else {
        set_large(arena, p, Some(new));
    }
}

/// Node with the smallest key.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_small(arena, idx) {
            Some(s) => curr = Some(s),
            None => return Some(idx),
        }
    }
    curr
}

/// Node with the largest key.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_large(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_large(arena, node) {
        let mut curr = l;
        while let Some(s) = get_small(arena, curr) {
            curr = s;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_large(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(s) = get_small(arena, node) {
        let mut curr = s;
        while let Some(l) = get_large(arena, curr) {
            curr = l;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_small(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_small(arena, root).map_or(0, |s| size_inner(arena, s))
        + get_large(arena, root).map_or(0, |l| size_inner(arena, l))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Longest root-to-leaf path, counted in nodes.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| {
        1 + height(arena, get_small(arena, r)).max(height(arena, get_large(arena, r)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::red_black::DkNode;

    // 2 is the root with 1 and 3 as children.
    fn small_tree() -> Vec<DkNode<()>> {
        let mut arena = vec![
            DkNode::new(2.0, ()),
            DkNode::new(1.0, ()),
            DkNode::new(3.0, ()),
        ];
        arena[0].small = Some(1);
        arena[0].large = Some(2);
        arena[1].p = Some(0);
        arena[2].p = Some(0);
        arena
    }

    #[test]
    fn first_last_and_walks() {
        let arena = small_tree();
        assert_eq!(first(&arena, Some(0)), Some(1));
        assert_eq!(last(&arena, Some(0)), Some(2));
        assert_eq!(next(&arena, 1), Some(0));
        assert_eq!(next(&arena, 0), Some(2));
        assert_eq!(next(&arena, 2), None);
        assert_eq!(prev(&arena, 2), Some(0));
        assert_eq!(prev(&arena, 1), None);
    }

    #[test]
    fn size_and_height() {
        let arena = small_tree();
        assert_eq!(size(&arena, Some(0)), 3);
        assert_eq!(size(&arena, None), 0);
        assert_eq!(height(&arena, Some(0)), 2);
        assert_eq!(height(&arena, Some(1)), 1);
    }
}
