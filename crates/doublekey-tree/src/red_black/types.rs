use std::fmt;

use crate::types::{KeyedNode, Node};

/// Node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Which child slot of a node a link occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Small,
    Large,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Small => f.write_str("small"),
            Side::Large => f.write_str("large"),
        }
    }
}

/// Red-black node keyed by an `f64`.
#[derive(Clone, Debug)]
pub struct DkNode<P> {
    pub p: Option<u32>,
    pub small: Option<u32>,
    pub large: Option<u32>,
    pub key: f64,
    pub payload: Option<P>,
    pub color: Color,
}

impl<P> DkNode<P> {
    pub fn new(key: f64, payload: P) -> Self {
        Self {
            p: None,
            small: None,
            large: None,
            key,
            payload: Some(payload),
            color: Color::Red,
        }
    }

    /// An unlinked red node without a payload.
    pub(crate) fn vacant(key: f64) -> Self {
        Self {
            p: None,
            small: None,
            large: None,
            key,
            payload: None,
            color: Color::Red,
        }
    }

    /// A node sitting in the spare chain; `next` is the following spare node.
    ///
    /// The NaN key makes an accidental insert of a spare node fail.
    pub(crate) fn spare(next: Option<u32>) -> Self {
        Self {
            p: None,
            small: None,
            large: next,
            key: f64::NAN,
            payload: None,
            color: Color::Black,
        }
    }
}

impl<P> Node for DkNode<P> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn small(&self) -> Option<u32> {
        self.small
    }

    fn large(&self) -> Option<u32> {
        self.large
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_small(&mut self, v: Option<u32>) {
        self.small = v;
    }

    fn set_large(&mut self, v: Option<u32>) {
        self.large = v;
    }
}

impl<P> KeyedNode for DkNode<P> {
    type Payload = P;

    fn key(&self) -> f64 {
        self.key
    }

    fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }
}

/// Red-black specific node behavior.
pub trait RbNodeLike: KeyedNode {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn is_black(&self) -> bool {
        self.color() == Color::Black
    }
}

impl<P> RbNodeLike for DkNode<P> {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
