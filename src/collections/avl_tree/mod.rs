//! A self-balancing binary search tree, [`AvlTreeMap`].
//!
//! Each node caches the height of its subtree. After every insertion or removal, the nodes on the
//! path back up to the root are checked and rotated wherever the heights of their two subtrees
//! differ by more than one, so the height of the whole tree stays `O(log n)`.

pub mod map;

#[doc(inline)]
pub use map::AvlTreeMap;
