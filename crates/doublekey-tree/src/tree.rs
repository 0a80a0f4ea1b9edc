use std::fmt::Debug;

use crate::linked::{self, LinearizeError, ListViolation, SortedLinks};
use crate::red_black::{self, InsertError, InvariantViolation};
use crate::store::{AllocError, NodeStore};
use crate::util;

/// Red-black index from `f64` keys to payloads, backed by its own
/// [`NodeStore`].
///
/// Use `P = &'a T` to keep the payloads owned by the caller.
#[derive(Clone, Debug)]
pub struct DoubleKeyTree<P> {
    store: NodeStore<P>,
    root: Option<u32>,
    len: usize,
}

impl<P> Default for DoubleKeyTree<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> DoubleKeyTree<P> {
    pub fn new() -> Self {
        Self {
            store: NodeStore::new(),
            root: None,
            len: 0,
        }
    }

    /// Empty tree with `n` nodes pooled up front.
    pub fn with_pool(n: usize) -> Result<Self, AllocError> {
        let mut store = NodeStore::new();
        store.create_node_pool(n)?;
        Ok(Self {
            store,
            root: None,
            len: 0,
        })
    }

    /// Inserts `key` and returns the node index now holding it.
    ///
    /// A duplicate or NaN key leaves the tree as it was and hands the payload
    /// back inside [`Rejected`].
    pub fn insert(&mut self, key: f64, payload: P) -> Result<u32, Rejected<P>> {
        let node = match self.store.vacant(key) {
            Ok(node) => node,
            Err(err) => return Err(Rejected::new(err.into(), payload)),
        };
        match red_black::insert(self.store.arena_mut(), self.root, node) {
            Ok(root) => {
                self.store.set_payload(node, payload);
                self.root = Some(root);
                self.len += 1;
                Ok(node)
            }
            Err(err) => {
                self.store.release(node);
                Err(Rejected::new(err, payload))
            }
        }
    }

    pub fn lookup(&self, key: f64) -> Option<&P> {
        red_black::lookup(self.store.arena(), self.root, key)
    }

    pub fn find(&self, key: f64) -> Option<u32> {
        red_black::find(self.store.arena(), self.root, key)
    }

    pub fn contains(&self, key: f64) -> bool {
        self.find(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn store(&self) -> &NodeStore<P> {
        &self.store
    }

    pub fn key(&self, idx: u32) -> f64 {
        self.store.key(idx)
    }

    pub fn payload(&self, idx: u32) -> Option<&P> {
        self.store.payload(idx)
    }

    pub fn first(&self) -> Option<u32> {
        util::first(self.store.arena(), self.root)
    }

    pub fn last(&self) -> Option<u32> {
        util::last(self.store.arena(), self.root)
    }

    pub fn next(&self, curr: u32) -> Option<u32> {
        util::next(self.store.arena(), curr)
    }

    pub fn prev(&self, curr: u32) -> Option<u32> {
        util::prev(self.store.arena(), curr)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &P)> + '_ {
        std::iter::successors(self.first(), move |&i| self.next(i))
            .filter_map(move |i| self.payload(i).map(|p| (self.key(i), p)))
    }

    pub fn height(&self) -> usize {
        util::height(self.store.arena(), self.root)
    }

    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        red_black::check_invariants(self.store.arena(), self.root)
    }

    /// Consumes the tree and relinks its nodes into a sorted list.
    pub fn into_sorted_list(mut self) -> Result<SortedList<P>, LinearizeError> {
        let links = linked::convert_to_sorted_linked(self.store.arena_mut(), self.root)?;
        Ok(SortedList {
            store: self.store,
            links,
            len: self.len,
        })
    }
}

impl<P: Debug> DoubleKeyTree<P> {
    pub fn print(&self) -> String {
        red_black::print(self.store.arena(), self.root, "")
    }
}

/// A payload the tree refused, with the reason.
#[derive(Clone, Debug, PartialEq)]
pub struct Rejected<P> {
    pub error: InsertError,
    pub payload: P,
}

impl<P> Rejected<P> {
    fn new(error: InsertError, payload: P) -> Self {
        Self { error, payload }
    }
}

impl<P> From<Rejected<P>> for InsertError {
    fn from(rejected: Rejected<P>) -> Self {
        rejected.error
    }
}

/// The nodes of a consumed [`DoubleKeyTree`] as a sorted doubly linked list.
#[derive(Clone, Debug)]
pub struct SortedList<P> {
    store: NodeStore<P>,
    links: SortedLinks,
    len: usize,
}

impl<P> SortedList<P> {
    /// Node with the largest key.
    pub fn head(&self) -> u32 {
        self.links.head
    }

    /// Node with the smallest key.
    pub fn tail(&self) -> u32 {
        self.links.tail
    }

    pub fn links(&self) -> SortedLinks {
        self.links
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn store(&self) -> &NodeStore<P> {
        &self.store
    }

    /// Entries from the tail (smallest key) toward the head.
    pub fn ascending(&self) -> impl Iterator<Item = (f64, &P)> + '_ {
        std::iter::successors(Some(self.links.tail), move |&i| self.store.node(i).large)
            .filter_map(move |i| self.store.payload(i).map(|p| (self.store.key(i), p)))
    }

    /// Entries from the head (largest key) toward the tail.
    pub fn descending(&self) -> impl Iterator<Item = (f64, &P)> + '_ {
        std::iter::successors(Some(self.links.head), move |&i| self.store.node(i).small)
            .filter_map(move |i| self.store.payload(i).map(|p| (self.store.key(i), p)))
    }

    /// Verifies ordering and linkage in both directions.
    pub fn check(&self) -> Result<usize, ListViolation> {
        let walked = linked::check_sorted_list(self.store.arena(), self.links)?;
        if walked != self.len {
            return Err(ListViolation::CountMismatch {
                walked,
                expected: self.len,
            });
        }
        Ok(walked)
    }
}
