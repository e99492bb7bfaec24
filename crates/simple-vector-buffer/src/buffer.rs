//! Move-only ownership of a contiguous element block.
//!
//! An [`OwnedBuffer`] is either empty (no allocation) or owns exactly one
//! boxed slice. Ownership moves in O(1) and the block is released exactly
//! once, when the owning buffer is dropped. There is deliberately no
//! `Clone` impl: duplicating ownership of a block is a type error.

use std::mem;
use std::ops::{Index, IndexMut};

/// Exclusively-owned heap block of `T`, or nothing.
///
/// The allocated length is fixed for the lifetime of the block. Growing
/// means building a larger buffer and [`swap`](OwnedBuffer::swap)ping it
/// into place; the old block is dropped when the temporary goes out of
/// scope.
#[derive(Debug)]
pub struct OwnedBuffer<T> {
    /// `None` is the empty state. Never `Some` of a zero-length box.
    block: Option<Box<[T]>>,
}

impl<T> OwnedBuffer<T> {
    /// The empty buffer. Does not allocate.
    pub const fn empty() -> Self {
        Self { block: None }
    }

    /// Allocate `count` slots, each holding `T::default()`.
    ///
    /// A `count` of zero produces the empty state without allocating.
    /// Allocation failure aborts through the global allocator.
    pub fn new(count: usize) -> Self
    where
        T: Default,
    {
        if count == 0 {
            return Self::empty();
        }
        let block: Box<[T]> = (0..count).map(|_| T::default()).collect();
        Self { block: Some(block) }
    }

    /// Adopt an existing allocation, taking exclusive ownership of it.
    ///
    /// A zero-length box is normalised to the empty state.
    pub fn from_boxed_slice(block: Box<[T]>) -> Self {
        if block.is_empty() {
            Self::empty()
        } else {
            Self { block: Some(block) }
        }
    }

    /// Move the block out, leaving `self` empty.
    ///
    /// This is the explicit form of move-assignment: the returned buffer
    /// owns whatever `self` owned.
    pub fn take(&mut self) -> Self {
        Self {
            block: self.block.take(),
        }
    }

    /// Relinquish ownership of the block to the caller.
    ///
    /// Returns `None` if the buffer was already empty. Afterwards the
    /// buffer is empty and dropping it releases nothing.
    #[must_use = "the released block is dropped immediately if unused"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.block.take()
    }

    /// Whether the buffer currently holds an allocation.
    pub fn is_allocated(&self) -> bool {
        self.block.is_some()
    }

    /// The owned block, or `None` in the empty state.
    pub fn get(&self) -> Option<&[T]> {
        self.block.as_deref()
    }

    /// Mutable access to the owned block, or `None` in the empty state.
    pub fn get_mut(&mut self) -> Option<&mut [T]> {
        self.block.as_deref_mut()
    }

    /// The whole allocated region; empty in the empty state.
    pub fn as_slice(&self) -> &[T] {
        self.block.as_deref().unwrap_or(&[])
    }

    /// The whole allocated region, mutably; empty in the empty state.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.block.as_deref_mut() {
            Some(block) => block,
            None => &mut [],
        }
    }

    /// Number of allocated slots. Zero in the empty state.
    pub fn len(&self) -> usize {
        self.block.as_ref().map_or(0, |b| b.len())
    }

    /// Whether the allocated region has no slots.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exchange blocks with `other` in O(1). Never allocates.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.block, &mut other.block);
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Box<[T]>> for OwnedBuffer<T> {
    fn from(block: Box<[T]>) -> Self {
        Self::from_boxed_slice(block)
    }
}

impl<T> From<Vec<T>> for OwnedBuffer<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_boxed_slice(vec.into_boxed_slice())
    }
}

/// Indexed access over the allocated region.
///
/// # Panics
///
/// Panics if `index` is outside the allocated region (including any
/// index on an empty buffer).
impl<T> Index<usize> for OwnedBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}
