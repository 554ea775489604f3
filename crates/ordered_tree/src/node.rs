//! Tree nodes and the balancing primitives shared by every mutator.
//!
//! Each node stores the color of the link pointing at it from its parent; an
//! absent child counts as a black link.

pub(crate) type Link<K> = Option<Box<Node<K>>>;

#[derive(Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) red: bool,
    pub(crate) size: usize,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// A fresh leaf is always attached with a red link.
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            red: true,
            size: 1,
            left: None,
            right: None,
        }
    }

    pub(crate) fn update_size(&mut self) {
        self.size = 1 + size(&self.left) + size(&self.right);
    }
}

pub(crate) fn is_red<K>(link: &Link<K>) -> bool {
    link.as_ref().is_some_and(|n| n.red)
}

/// Whether `link` exists and its left child is red.
pub(crate) fn is_left_red<K>(link: &Link<K>) -> bool {
    link.as_ref().is_some_and(|n| is_red(&n.left))
}

pub(crate) fn size<K>(link: &Link<K>) -> usize {
    link.as_ref().map(|n| n.size).unwrap_or(0)
}

/// Makes a right-leaning red link lean to the left.
pub(crate) fn rotate_left<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    debug_assert!(is_red(&h.right), "rotate_left on a black right link");
    let Some(mut x) = h.right.take() else {
        return h;
    };
    h.right = x.left.take();
    x.red = h.red;
    h.red = true;
    h.update_size();
    x.left = Some(h);
    x.update_size();
    x
}

/// Makes a left-leaning red link lean to the right.
pub(crate) fn rotate_right<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    debug_assert!(is_red(&h.left), "rotate_right on a black left link");
    let Some(mut x) = h.left.take() else {
        return h;
    };
    h.left = x.right.take();
    x.red = h.red;
    h.red = true;
    h.update_size();
    x.right = Some(h);
    x.update_size();
    x
}

pub(crate) fn flip_colors<K>(h: &mut Node<K>) {
    h.red = !h.red;
    if let Some(left) = h.left.as_deref_mut() {
        left.red = !left.red;
    }
    if let Some(right) = h.right.as_deref_mut() {
        right.red = !right.red;
    }
}

/// Assuming `h` is red and both `h.left` and `h.left.left` are black, makes
/// `h.left` or one of its children red.
pub(crate) fn move_red_left<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    flip_colors(&mut h);
    if is_left_red(&h.right) {
        if let Some(right) = h.right.take() {
            h.right = Some(rotate_right(right));
        }
        h = rotate_left(h);
        flip_colors(&mut h);
    }
    h
}

/// Assuming `h` is red and both `h.right` and `h.right.left` are black, makes
/// `h.right` or one of its children red.
pub(crate) fn move_red_right<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    flip_colors(&mut h);
    if is_left_red(&h.left) {
        h = rotate_right(h);
        flip_colors(&mut h);
    }
    h
}

/// Restores the left-leaning invariants at `h` on the way back up a
/// deletion path and refreshes its size.
pub(crate) fn balance<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    if is_red(&h.right) {
        h = rotate_left(h);
    }
    if is_red(&h.left) && is_left_red(&h.left) {
        h = rotate_right(h);
    }
    if is_red(&h.left) && is_red(&h.right) {
        flip_colors(&mut h);
    }
    h.update_size();
    h
}

pub(crate) fn height<K>(link: &Link<K>) -> isize {
    match link.as_deref() {
        None => -1,
        Some(n) => 1 + height(&n.left).max(height(&n.right)),
    }
}
