mod llrb;
mod std_btree;

pub use llrb::OrderedTree;
pub use std_btree::StdBTreeSet;
