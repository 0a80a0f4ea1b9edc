//! Node trait definitions.
//!
//! Nodes are plain structs living in a caller-owned arena. Each "pointer"
//! is an `Option<u32>` index into that arena, so every tree function takes
//! the arena as a slice and works with indices.

/// Structural links (`p`, `small`, `large`).
///
/// While a node is part of a tree, `small` and `large` are its children.
/// After [`convert_to_sorted_linked`](crate::linked::convert_to_sorted_linked)
/// they are the list links toward smaller and larger keys.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn small(&self) -> Option<u32>;
    fn large(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_small(&mut self, v: Option<u32>);
    fn set_large(&mut self, v: Option<u32>);
}

/// Key/payload access for nodes indexed by an `f64` key.
///
/// The payload is never inspected by the tree. It is `None` only for spare
/// nodes that the [`NodeStore`](crate::store::NodeStore) has not handed out.
pub trait KeyedNode: Node {
    type Payload;

    fn key(&self) -> f64;
    fn payload(&self) -> Option<&Self::Payload>;
}
