use std::fmt::Debug;

use super::super::types::RbNodeLike;

/// Debug printer for red-black trees.
///
/// Each node renders as `Node[i] <color> { key = payload }` followed by its
/// indented `S=` (small) and `L=` (large) subtrees; `∅` marks a missing child.
pub fn print<N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    N: RbNodeLike,
    N::Payload: Debug,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let color = if n.is_black() { "black" } else { "red" };
            let small = print(arena, n.small(), &format!("{tab}  "));
            let large = print(arena, n.large(), &format!("{tab}  "));
            match n.payload() {
                Some(payload) => format!(
                    "Node[{i}] {color} {{ {} = {payload:?} }}\n{tab}S={small}\n{tab}L={large}",
                    n.key()
                ),
                None => format!(
                    "Node[{i}] {color} {{ {} }}\n{tab}S={small}\n{tab}L={large}",
                    n.key()
                ),
            }
        }
    }
}
