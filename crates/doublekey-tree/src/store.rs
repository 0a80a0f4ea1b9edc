//! Node store: the arena that owns every node and a chain of spare nodes.
//!
//! Spare nodes (from [`NodeStore::create_node_pool`] or
//! [`NodeStore::release`]) are chained through their `large` link and handed
//! out again by [`NodeStore::acquire`].

use std::collections::TryReserveError;

use log::trace;

use crate::red_black::DkNode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    #[error("node allocation failed: {0}")]
    Reserve(#[from] TryReserveError),
    #[error("node index space exhausted: {available} free indices, {requested} requested")]
    IndexSpace { requested: usize, available: usize },
}

#[derive(Clone, Debug)]
pub struct NodeStore<P> {
    arena: Vec<DkNode<P>>,
    spare: Option<u32>,
}

impl<P> Default for NodeStore<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> NodeStore<P> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            spare: None,
        }
    }

    /// Index of the first of `n` fresh slots, if they fit in `u32` indices.
    fn next_indices(&self, n: usize) -> Result<u32, AllocError> {
        let first = self.arena.len();
        let available = (u32::MAX as usize).saturating_sub(first).saturating_add(1);
        if n > available {
            return Err(AllocError::IndexSpace {
                requested: n,
                available,
            });
        }
        u32::try_from(first).map_err(|_| AllocError::IndexSpace {
            requested: n,
            available: 0,
        })
    }

    /// Appends one node with no links.
    pub fn create_node(&mut self, key: f64, payload: P) -> Result<u32, AllocError> {
        let idx = self.next_indices(1)?;
        self.arena.try_reserve(1)?;
        self.arena.push(DkNode::new(key, payload));
        Ok(idx)
    }

    /// Appends `n` spare nodes in one block, each linked to the next through
    /// `large`.
    ///
    /// The last pooled node links onto whatever was spare before (`None` for a
    /// store without spare nodes). Returns the head of the spare chain.
    pub fn create_node_pool(&mut self, n: usize) -> Result<Option<u32>, AllocError> {
        if n == 0 {
            return Ok(self.spare);
        }
        let first = self.next_indices(n)?;
        self.arena.try_reserve(n)?;

        let last = first + (n - 1) as u32;
        for idx in first..last {
            self.arena.push(DkNode::spare(Some(idx + 1)));
        }
        self.arena.push(DkNode::spare(self.spare));
        self.spare = Some(first);

        trace!("pooled {n} nodes at {first}..={last}");
        Ok(self.spare)
    }

    /// Hands out a spare node, or appends a new one when none is left.
    pub fn acquire(&mut self, key: f64, payload: P) -> Result<u32, AllocError> {
        let idx = self.vacant(key)?;
        self.arena[idx as usize].payload = Some(payload);
        Ok(idx)
    }

    /// Like [`NodeStore::acquire`], but the node carries only `key` and no
    /// payload yet.
    pub fn vacant(&mut self, key: f64) -> Result<u32, AllocError> {
        let idx = match self.spare {
            Some(idx) => {
                self.spare = self.arena[idx as usize].large;
                idx
            }
            None => {
                let idx = self.next_indices(1)?;
                self.arena.try_reserve(1)?;
                self.arena.push(DkNode::spare(None));
                idx
            }
        };
        self.arena[idx as usize] = DkNode::vacant(key);
        Ok(idx)
    }

    /// Stores `payload` in node `idx`, returning the one it held before.
    pub fn set_payload(&mut self, idx: u32, payload: P) -> Option<P> {
        self.arena[idx as usize].payload.replace(payload)
    }

    /// Puts a node back on the spare chain and returns its payload.
    ///
    /// The node must not be linked into a tree or list.
    pub fn release(&mut self, idx: u32) -> Option<P> {
        let spare = self.spare;
        let node = &mut self.arena[idx as usize];
        let payload = node.payload.take();
        *node = DkNode::spare(spare);
        self.spare = Some(idx);
        payload
    }

    /// Head of the spare chain.
    pub fn spare_head(&self) -> Option<u32> {
        self.spare
    }

    /// Number of spare nodes.
    pub fn spare(&self) -> usize {
        std::iter::successors(self.spare, |&i| self.arena[i as usize].large).count()
    }

    pub fn node(&self, idx: u32) -> &DkNode<P> {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> f64 {
        self.arena[idx as usize].key
    }

    pub fn payload(&self, idx: u32) -> Option<&P> {
        self.arena[idx as usize].payload.as_ref()
    }

    /// Total number of nodes, spare ones included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn arena(&self) -> &[DkNode<P>] {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut [DkNode<P>] {
        &mut self.arena
    }
}
