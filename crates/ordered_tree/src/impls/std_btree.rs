use std::collections::BTreeSet;
use std::ops::Bound;

use crate::OrderedSet;

/// [`OrderedSet`] backed by [`BTreeSet`], used as a baseline.
pub struct StdBTreeSet<K: Ord> {
    inner: BTreeSet<K>,
}

impl<K: Ord> StdBTreeSet<K> {
    pub fn into_inner(self) -> BTreeSet<K> {
        self.inner
    }
}

impl<K: Ord> OrderedSet for StdBTreeSet<K> {
    type Key = K;

    fn new() -> Self {
        Self {
            inner: BTreeSet::new(),
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn contains(&self, key: &Self::Key) -> bool {
        self.inner.contains(key)
    }

    fn insert(&mut self, key: Self::Key) -> Option<Self::Key> {
        self.inner.replace(key)
    }

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Key> {
        self.inner.take(key)
    }

    fn first(&self) -> Option<&Self::Key> {
        self.inner.first()
    }

    fn last(&self) -> Option<&Self::Key> {
        self.inner.last()
    }

    fn pop_first(&mut self) -> Option<Self::Key> {
        self.inner.pop_first()
    }

    fn pop_last(&mut self) -> Option<Self::Key> {
        self.inner.pop_last()
    }

    fn keys_in_range(&self, low: &Self::Key, high: &Self::Key) -> Vec<&Self::Key> {
        if low > high {
            return Vec::new();
        }
        self.inner
            .range((Bound::Included(low), Bound::Included(high)))
            .collect()
    }
}
