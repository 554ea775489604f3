//! Ordered sets over totally ordered keys, centered on [`OrderedTree`], a
//! left-leaning red-black tree.

mod check;
mod error;
mod iter;
mod node;

pub mod impls;

/// Ordered set interface.
///
/// - Keys are unique.
/// - `insert` overwrites an equal key and returns the old one.
/// - `keys_in_range` is inclusive on both ends and empty when `low > high`.
pub trait OrderedSet {
    type Key: Ord;

    fn new() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, key: &Self::Key) -> bool;

    fn insert(&mut self, key: Self::Key) -> Option<Self::Key>;

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Key>;

    fn first(&self) -> Option<&Self::Key>;

    fn last(&self) -> Option<&Self::Key>;

    fn pop_first(&mut self) -> Option<Self::Key>;

    fn pop_last(&mut self) -> Option<Self::Key>;

    fn keys_in_range(&self, low: &Self::Key, high: &Self::Key) -> Vec<&Self::Key>;
}

pub use error::{TreeError, Violation};
pub use impls::{OrderedTree, StdBTreeSet};
pub use iter::Iter;
