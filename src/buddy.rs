//! Buddy allocator implementation
//!
//! The allocator manages a pool of `capacity` abstract units by splitting it
//! into power-of-two sized blocks. Bookkeeping lives in a complete binary
//! tree stored as one flat slice, where each node records the size of the
//! largest free contiguous block inside the sub-region it covers. Allocation,
//! release and size lookup each walk a single leaf-to-root path, giving
//! O(log(capacity)) operations with no per-block metadata.
use crate::utils::{left_child, parent, right_child};
use crate::{BuddyError, Result};
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use core::fmt::Write;

/// Buddy allocator over a pool of abstract units
///
/// Blocks are always power-of-two sized and identified by their offset into
/// the pool, so the allocator never touches real memory. The whole state is
/// the node table, allocated once at construction and freed as a single unit
/// when the allocator is dropped.
pub struct BuddyAllocator {
    /// Total pool size in units, a power of two
    capacity: usize,
    /// Per-node largest-free-block sizes, `2 * capacity - 1` entries
    nodes: Box<[usize]>,
}

impl BuddyAllocator {
    /// Create an allocator managing a pool of `capacity` units, fully free.
    ///
    /// # Errors
    ///
    /// - `BuddyError::InvalidCapacity` if `capacity` is zero, not a power of
    ///   two, or too large for the node table to be indexed
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 || !capacity.is_power_of_two() {
            return Err(BuddyError::InvalidCapacity);
        }

        let node_count = capacity
            .checked_mul(2)
            .ok_or(BuddyError::InvalidCapacity)?
            - 1;
        let mut nodes = vec![0; node_count].into_boxed_slice();

        // Walk the table in index order; each time the index crosses into a
        // new tree level, the span of its nodes halves.
        let mut span = capacity * 2;
        for (index, node) in nodes.iter_mut().enumerate() {
            if (index + 1).is_power_of_two() {
                span /= 2;
            }
            *node = span;
        }

        Ok(Self { capacity, nodes })
    }

    /// Allocate a block of at least `size` units, returning its offset.
    ///
    /// `size` is rounded up to the next power of two; a zero request is
    /// treated as a request for one unit. The descent always prefers the
    /// left subtree when it can satisfy the request, so placement is
    /// deterministic and leftmost-fit.
    ///
    /// # Errors
    ///
    /// - `BuddyError::OutOfMemory` if no free block of the rounded-up size
    ///   exists
    pub fn allocate(&mut self, size: usize) -> Result<usize> {
        let size = match size {
            0 => 1,
            n => n
                .checked_next_power_of_two()
                .ok_or(BuddyError::OutOfMemory)?,
        };

        if self.nodes[0] < size {
            return Err(BuddyError::OutOfMemory);
        }

        // Descend to the node whose span matches the request. The subtree
        // chosen at each step is guaranteed to contain a free block of at
        // least `size`, so the walk cannot dead-end.
        let mut index = 0;
        let mut node_size = self.capacity;
        while node_size != size {
            node_size /= 2;
            let left = left_child(index);
            index = if self.nodes[left] >= size {
                left
            } else {
                right_child(index)
            };
        }

        self.nodes[index] = 0;
        let offset = ((index + 1) * node_size) - self.capacity;

        // Restore the invariant along the path back to the root.
        while index > 0 {
            index = parent(index);
            self.nodes[index] = self.nodes[left_child(index)].max(self.nodes[right_child(index)]);
        }

        Ok(offset)
    }

    /// Release the block starting at `offset`, coalescing buddies on the
    /// way back to the root.
    ///
    /// # Errors
    ///
    /// - `BuddyError::InvalidOffset` if `offset` is out of range or does not
    ///   belong to a live allocation (double release included); the node
    ///   table is left untouched in that case
    pub fn release(&mut self, offset: usize) -> Result<()> {
        let (mut index, mut node_size) = self.find_consumed(offset)?;

        self.nodes[index] = node_size;

        while index > 0 {
            index = parent(index);
            node_size *= 2;

            let left = self.nodes[left_child(index)];
            let right = self.nodes[right_child(index)];

            // Two fully free buddies merge back into their parent's span.
            self.nodes[index] = if left + right == node_size {
                node_size
            } else {
                left.max(right)
            };
        }

        Ok(())
    }

    /// Size of the live block owning `offset`.
    ///
    /// This is the rounded-up size the allocator actually reserved, which
    /// may exceed what was passed to [`allocate`](Self::allocate).
    ///
    /// # Errors
    ///
    /// - `BuddyError::InvalidOffset` if `offset` is out of range or does not
    ///   belong to a live allocation
    pub fn block_size(&self, offset: usize) -> Result<usize> {
        self.find_consumed(offset)
            .map(|(_, node_size)| node_size)
    }

    /// The fixed pool size this allocator was constructed with.
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size of the largest block a call to `allocate` could currently
    /// return. Equals `capacity` exactly when the pool is fully free.
    #[must_use]
    #[inline]
    pub fn largest_free(&self) -> usize {
        self.nodes[0]
    }

    /// Render the node table for debugging, one line per tree level.
    ///
    /// Purely diagnostic; the output format is not a stable contract.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut span = self.capacity;
        let mut start = 0;
        let mut count = 1;

        while start < self.nodes.len() {
            let _ = write!(out, "span {span:>6} |");
            for node in &self.nodes[start..start + count] {
                let _ = write!(out, " {node}");
            }
            out.push('\n');

            start += count;
            count *= 2;
            span /= 2;
        }

        out
    }

    /// Walk upward from the leaf for `offset` to the node that was marked
    /// consumed by the matching `allocate` call, tracking its span.
    ///
    /// Reaching a nonzero root means no live allocation owns `offset`.
    fn find_consumed(&self, offset: usize) -> Result<(usize, usize)> {
        if offset >= self.capacity {
            return Err(BuddyError::InvalidOffset);
        }

        let mut index = offset + self.capacity - 1;
        let mut node_size = 1;

        while self.nodes[index] != 0 {
            if index == 0 {
                return Err(BuddyError::InvalidOffset);
            }
            node_size *= 2;
            index = parent(index);
        }

        Ok((index, node_size))
    }
}
