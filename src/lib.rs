//! # Buddytree: Fixed-Capacity Buddy Offset Allocator
//!
//! Buddytree manages a single contiguous pool of abstract units using the
//! buddy-system algorithm. Blocks are power-of-two sized and identified by
//! integer offsets into the pool, so the allocator never maps or touches
//! real memory. This makes it reusable as the core of a custom heap, a
//! GPU or NUMA region manager, or any subsystem that wants deterministic,
//! pointer-free block bookkeeping.
//!
//! ## Architecture
//!
//! The whole state is one implicit complete binary tree stored as a flat
//! buffer. Each node covers a power-of-two sub-region of the pool and
//! records the size of the largest free contiguous block inside it:
//! - **Allocation**: descend from the root towards the smallest span that
//!   fits the (rounded-up) request, always preferring the left subtree, so
//!   placement is deterministic leftmost-fit. O(log(capacity)).
//! - **Release**: walk up from the offset's leaf to the node marked
//!   consumed, restore it, and coalesce fully-free buddy pairs back into
//!   larger blocks on the way to the root. O(log(capacity)).
//!
//! Each instance exclusively owns its node table and every operation takes
//! `&mut self` (or `&self` for queries), so single ownership is enforced by
//! the type system; wrap the allocator in a lock to share it.
//!
//! ## Usage
//!
//! ```rust
//! use buddytree::BuddyAllocator;
//!
//! let mut allocator = BuddyAllocator::new(64).unwrap();
//!
//! // Sizes are rounded up to the next power of two.
//! let offset = allocator.allocate(5).unwrap();
//! assert_eq!(allocator.block_size(offset).unwrap(), 8);
//!
//! // Releasing merges buddy blocks back together.
//! allocator.release(offset).unwrap();
//! assert_eq!(allocator.largest_free(), 64);
//! ```
#![warn(clippy::pedantic, clippy::nursery)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod buddy;
mod error;
mod utils;

// Public exports
pub use buddy::BuddyAllocator;
pub use error::{BuddyError, Result};
