use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Bound, RangeBounds};

use log::{debug, trace};

use crate::OrderedSet;
use crate::check::check;
use crate::error::{TreeError, Violation};
use crate::iter::{Iter, collect_range};
use crate::node::{
    Link, Node, balance, flip_colors, height, is_left_red, is_red, move_red_left, move_red_right,
    rotate_left, rotate_right, size,
};

/// An ordered set of keys stored in a left-leaning red-black tree.
///
/// Every mutator rebuilds the path from the root to the affected node and
/// restores the invariants on the way back up, so the height stays within
/// `2 * log2(n + 1)`.
///
/// The tree is not synchronized: mutation needs `&mut self`, and sharing one
/// instance between threads requires an external lock.
#[derive(Clone)]
pub struct OrderedTree<K> {
    root: Link<K>,
}

impl<K> OrderedTree<K> {
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Number of keys, read from the cached root size.
    pub fn len(&self) -> usize {
        size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of links on the longest root-to-leaf path, `-1` when empty.
    ///
    /// Recomputed on every call.
    pub fn height(&self) -> isize {
        height(&self.root)
    }

    pub fn min(&self) -> Result<&K, TreeError> {
        let mut cur = self.root.as_deref().ok_or(TreeError::EmptyCollection)?;
        while let Some(left) = cur.left.as_deref() {
            cur = left;
        }
        Ok(&cur.key)
    }

    pub fn max(&self) -> Result<&K, TreeError> {
        let mut cur = self.root.as_deref().ok_or(TreeError::EmptyCollection)?;
        while let Some(right) = cur.right.as_deref() {
            cur = right;
        }
        Ok(&cur.key)
    }

    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root)
    }

    pub fn clear(&mut self) {
        self.root = None;
    }

    fn blacken_root(&mut self) {
        if let Some(root) = self.root.as_deref_mut() {
            root.red = false;
        }
    }

    /// Paints the root red when both children are black, so the top frame of a
    /// deletion already satisfies the `move_red_*` precondition.
    fn redden_root(&mut self) {
        if let Some(root) = self.root.as_deref_mut() {
            if !is_red(&root.left) && !is_red(&root.right) {
                root.red = true;
            }
        }
    }
}

impl<K: Ord> OrderedTree<K> {
    pub fn get(&self, key: &K) -> Option<&K> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(&node.key),
            }
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Inserts `key`, returning the equal key it replaced, if any.
    ///
    /// A replaced key is overwritten in place, so the size does not change.
    pub fn insert(&mut self, key: K) -> Option<K> {
        let (root, replaced) = Self::insert_node(self.root.take(), key);
        self.root = Some(root);
        self.blacken_root();
        if replaced.is_some() {
            trace!("insert replaced an equal key, len={}", self.len());
        }
        self.after_mutation();
        replaced
    }

    /// Removes and returns the key equal to `key`.
    ///
    /// Fails without touching the tree when it is empty or holds no such key.
    pub fn remove(&mut self, key: &K) -> Result<K, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyCollection);
        }
        if !self.contains(key) {
            trace!("remove missed, len={}", self.len());
            return Err(TreeError::KeyNotFound);
        }

        self.redden_root();
        let Some(root) = self.root.take() else {
            return Err(TreeError::EmptyCollection);
        };
        let (root, removed) = Self::remove_node(root, key);
        self.root = root;
        self.blacken_root();
        self.after_mutation();
        removed.ok_or(TreeError::KeyNotFound)
    }

    pub fn delete_min(&mut self) -> Result<K, TreeError> {
        self.redden_root();
        let root = self.root.take().ok_or(TreeError::EmptyCollection)?;
        let (root, min) = Self::delete_min_node(root);
        self.root = root;
        self.blacken_root();
        self.after_mutation();
        Ok(min)
    }

    pub fn delete_max(&mut self) -> Result<K, TreeError> {
        self.redden_root();
        let root = self.root.take().ok_or(TreeError::EmptyCollection)?;
        let (root, max) = Self::delete_max_node(root);
        self.root = root;
        self.blacken_root();
        self.after_mutation();
        Ok(max)
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<&K> {
        match (self.min(), self.max()) {
            (Ok(low), Ok(high)) => self.keys_in_range(low, high),
            _ => Vec::new(),
        }
    }

    /// Keys `k` with `low <= k <= high`, ascending. Empty when `low > high`.
    pub fn keys_in_range(&self, low: &K, high: &K) -> Vec<&K> {
        let mut out = Vec::new();
        collect_range(
            &self.root,
            Bound::Included(low),
            Bound::Included(high),
            &mut out,
        );
        out
    }

    /// Keys inside `range`, ascending.
    ///
    /// Unlike `BTreeSet::range`, a range whose start lies past its end is
    /// simply empty.
    pub fn range<R: RangeBounds<K>>(&self, range: R) -> Vec<&K> {
        let mut out = Vec::new();
        collect_range(&self.root, range.start_bound(), range.end_bound(), &mut out);
        out
    }

    pub fn check_invariants(&self) -> Result<(), Violation> {
        check(&self.root).inspect_err(|v| debug!("invariant violated: {v}"))
    }

    #[cfg(feature = "strict-invariants")]
    fn after_mutation(&self) {
        if let Err(v) = self.check_invariants() {
            panic!("ordered tree corrupted: {v}");
        }
    }

    #[cfg(not(feature = "strict-invariants"))]
    fn after_mutation(&self) {}

    fn insert_node(h: Link<K>, key: K) -> (Box<Node<K>>, Option<K>) {
        let Some(mut h) = h else {
            return (Box::new(Node::new(key)), None);
        };

        let replaced = match key.cmp(&h.key) {
            Ordering::Less => {
                let (left, replaced) = Self::insert_node(h.left.take(), key);
                h.left = Some(left);
                replaced
            }
            Ordering::Greater => {
                let (right, replaced) = Self::insert_node(h.right.take(), key);
                h.right = Some(right);
                replaced
            }
            Ordering::Equal => Some(mem::replace(&mut h.key, key)),
        };

        if is_red(&h.right) && !is_red(&h.left) {
            h = rotate_left(h);
        }
        if is_red(&h.left) && is_left_red(&h.left) {
            h = rotate_right(h);
        }
        if is_red(&h.left) && is_red(&h.right) {
            flip_colors(&mut h);
        }
        h.update_size();

        (h, replaced)
    }

    /// Detaches the minimum of the subtree, returning the new subtree and the
    /// removed key.
    fn delete_min_node(mut h: Box<Node<K>>) -> (Link<K>, K) {
        if h.left.is_some() && !is_red(&h.left) && !is_left_red(&h.left) {
            h = move_red_left(h);
        }
        let Some(left) = h.left.take() else {
            let Node { key, right, .. } = *h;
            debug_assert!(right.is_none());
            return (right, key);
        };
        let (left, min) = Self::delete_min_node(left);
        h.left = left;
        (Some(balance(h)), min)
    }

    fn delete_max_node(mut h: Box<Node<K>>) -> (Link<K>, K) {
        if is_red(&h.left) {
            h = rotate_right(h);
        }
        if h.right.is_some() && !is_red(&h.right) && !is_left_red(&h.right) {
            h = move_red_right(h);
        }
        let Some(right) = h.right.take() else {
            let Node { key, left, .. } = *h;
            debug_assert!(left.is_none());
            return (left, key);
        };
        let (right, max) = Self::delete_max_node(right);
        h.right = right;
        (Some(balance(h)), max)
    }

    fn remove_node(mut h: Box<Node<K>>, key: &K) -> (Link<K>, Option<K>) {
        let removed = if *key < h.key {
            if h.left.is_some() && !is_red(&h.left) && !is_left_red(&h.left) {
                h = move_red_left(h);
            }
            match h.left.take() {
                Some(left) => {
                    let (left, removed) = Self::remove_node(left, key);
                    h.left = left;
                    removed
                }
                None => None,
            }
        } else {
            if is_red(&h.left) {
                h = rotate_right(h);
            }
            if *key == h.key && h.right.is_none() {
                let Node { key, left, .. } = *h;
                debug_assert!(left.is_none());
                return (left, Some(key));
            }
            if h.right.is_some() && !is_red(&h.right) && !is_left_red(&h.right) {
                h = move_red_right(h);
            }
            match h.right.take() {
                Some(right) if *key == h.key => {
                    // the successor's key moves up into `h`
                    let (right, successor) = Self::delete_min_node(right);
                    h.right = right;
                    Some(mem::replace(&mut h.key, successor))
                }
                Some(right) => {
                    let (right, removed) = Self::remove_node(right, key);
                    h.right = right;
                    removed
                }
                None => None,
            }
        };

        (Some(balance(h)), removed)
    }
}

impl<K> Default for OrderedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for OrderedTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K> IntoIterator for &'a OrderedTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord> Extend<K> for OrderedTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for OrderedTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> OrderedSet for OrderedTree<K> {
    type Key = K;

    fn new() -> Self {
        OrderedTree::new()
    }

    fn len(&self) -> usize {
        OrderedTree::len(self)
    }

    fn contains(&self, key: &Self::Key) -> bool {
        OrderedTree::contains(self, key)
    }

    fn insert(&mut self, key: Self::Key) -> Option<Self::Key> {
        OrderedTree::insert(self, key)
    }

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Key> {
        OrderedTree::remove(self, key).ok()
    }

    fn first(&self) -> Option<&Self::Key> {
        self.min().ok()
    }

    fn last(&self) -> Option<&Self::Key> {
        self.max().ok()
    }

    fn pop_first(&mut self) -> Option<Self::Key> {
        self.delete_min().ok()
    }

    fn pop_last(&mut self) -> Option<Self::Key> {
        self.delete_max().ok()
    }

    fn keys_in_range(&self, low: &Self::Key, high: &Self::Key) -> Vec<&Self::Key> {
        OrderedTree::keys_in_range(self, low, high)
    }
}
