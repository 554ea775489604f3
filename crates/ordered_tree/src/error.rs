/// Errors reported by [`OrderedTree`](crate::OrderedTree) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The operation needs at least one key.
    #[error("tree is empty")]
    EmptyCollection,
    /// The key passed to `remove` is not stored in the tree.
    #[error("key not found")]
    KeyNotFound,
}

/// A broken structural invariant, as reported by
/// [`OrderedTree::check_invariants`](crate::OrderedTree::check_invariants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("root link is red")]
    RedRoot,
    #[error("red link leans right")]
    RightLeaningRed,
    #[error("two consecutive red links")]
    DoubleRed,
    #[error("black height differs between siblings ({left} vs {right})")]
    BlackImbalance { left: usize, right: usize },
    #[error("cached size {cached} but subtree holds {actual} keys")]
    SizeMismatch { cached: usize, actual: usize },
    #[error("keys are not in symmetric order")]
    OutOfOrder,
}
