use crate::error::Violation;
use crate::node::{Link, is_red, size};

/// Verifies every structural invariant of the tree rooted at `root`.
pub(crate) fn check<K: Ord>(root: &Link<K>) -> Result<(), Violation> {
    if is_red(root) {
        return Err(Violation::RedRoot);
    }
    walk(root, None, None).map(|_| ())
}

/// Returns the number of black links on every path below `link`.
fn walk<K: Ord>(link: &Link<K>, lower: Option<&K>, upper: Option<&K>) -> Result<usize, Violation> {
    let Some(node) = link.as_deref() else {
        return Ok(0);
    };
    if lower.is_some_and(|lo| *lo >= node.key) || upper.is_some_and(|hi| *hi <= node.key) {
        return Err(Violation::OutOfOrder);
    }
    if is_red(&node.right) {
        return Err(Violation::RightLeaningRed);
    }
    if node.red && is_red(&node.left) {
        return Err(Violation::DoubleRed);
    }
    let actual = 1 + size(&node.left) + size(&node.right);
    if node.size != actual {
        return Err(Violation::SizeMismatch {
            cached: node.size,
            actual,
        });
    }

    let left = walk(&node.left, lower, Some(&node.key))?;
    let right = walk(&node.right, Some(&node.key), upper)?;
    if left != right {
        return Err(Violation::BlackImbalance { left, right });
    }
    Ok(left + usize::from(!node.red))
}
