//! Index arithmetic for the implicit binary tree.
//!
//! The tree is stored as one flat slice: node 0 is the root, and for any
//! node `index` the children live at `2 * index + 1` and `2 * index + 2`.

/// Index of the parent of `index`.
///
/// The root (index 0) has no parent; callers must not pass 0.
#[inline]
pub(crate) const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Index of the left child of `index` (covers the lower half of its span).
#[inline]
pub(crate) const fn left_child(index: usize) -> usize {
    (2 * index) + 1
}

/// Index of the right child of `index` (covers the upper half of its span).
#[inline]
pub(crate) const fn right_child(index: usize) -> usize {
    (2 * index) + 2
}
