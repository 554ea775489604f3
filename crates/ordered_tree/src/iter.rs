use std::iter::FusedIterator;
use std::ops::Bound;

use crate::node::{Link, Node, size};

/// Ascending iterator over the keys of an [`OrderedTree`](crate::OrderedTree).
///
/// Walks with an explicit stack of at most `height + 1` nodes, so it does not
/// recurse.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: &'a Link<K>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: size(root),
        };
        iter.descend_left(root.as_deref());
        iter
    }

    fn descend_left(&mut self, mut cur: Option<&'a Node<K>>) {
        while let Some(node) = cur {
            self.stack.push(node);
            cur = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// In-order walk that prunes every subtree lying entirely outside
/// `(lower, upper)`, appending the keys inside to `out`.
pub(crate) fn collect_range<'a, K: Ord>(
    link: &'a Link<K>,
    lower: Bound<&K>,
    upper: Bound<&K>,
    out: &mut Vec<&'a K>,
) {
    let Some(node) = link.as_deref() else {
        return;
    };
    let key = &node.key;

    let go_left = match lower {
        Bound::Included(lo) | Bound::Excluded(lo) => lo < key,
        Bound::Unbounded => true,
    };
    let above_lower = match lower {
        Bound::Included(lo) => lo <= key,
        Bound::Excluded(lo) => lo < key,
        Bound::Unbounded => true,
    };
    let below_upper = match upper {
        Bound::Included(hi) => key <= hi,
        Bound::Excluded(hi) => key < hi,
        Bound::Unbounded => true,
    };
    let go_right = match upper {
        Bound::Included(hi) | Bound::Excluded(hi) => hi > key,
        Bound::Unbounded => true,
    };

    if go_left {
        collect_range(&node.left, lower, upper, out);
    }
    if above_lower && below_upper {
        out.push(key);
    }
    if go_right {
        collect_range(&node.right, lower, upper, out);
    }
}
