//! The growable array itself.
//!
//! A [`SimpleVector`] owns one [`OwnedBuffer`] whose length is the
//! capacity, and a logical `size`. Invariant: `size <= capacity`, and the
//! slots `[0, size)` are the elements.
//!
//! Growth builds a fresh buffer, moves the live elements into it, and then
//! swaps it into place. The old block is dropped only after the transfer
//! finishes. When growth happens on `insert`, the gap for the new element
//! is opened during the same pass.

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use simple_vector_buffer::OwnedBuffer;
use tracing::trace;

use crate::config::{grown_capacity, ReserveProxy};
use crate::error::VectorError;

/// Growable contiguous array with a doubling growth policy.
///
/// Derefs to the slice of live elements, so the usual slice API
/// (`iter`, `iter_mut`, `len`, `first`, `sort`, ...) is available
/// directly. Comparisons, hashing and `Debug` only look at the live
/// elements; capacity never participates.
pub struct SimpleVector<T> {
    /// Allocated storage. `buffer.len()` is the capacity.
    buffer: OwnedBuffer<T>,
    /// Number of live elements at the front of `buffer`.
    size: usize,
}

impl<T> SimpleVector<T> {
    /// An empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buffer: OwnedBuffer::empty(),
            size: 0,
        }
    }

    /// Build a vector of `size` clones of `value`.
    ///
    /// Size and capacity are both `size`.
    pub fn from_elem(size: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            buffer: OwnedBuffer::from(vec![value; size]),
            size,
        }
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of slots the current allocation holds.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the vector holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The live elements.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.size]
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let size = self.size;
        &mut self.buffer.as_mut_slice()[..size]
    }

    /// Bounds-checked access to the element at `index`.
    pub fn at(&self, index: usize) -> Result<&T, VectorError> {
        self.check_index(index)?;
        Ok(&self.buffer[index])
    }

    /// Bounds-checked mutable access to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        self.check_index(index)?;
        Ok(&mut self.buffer[index])
    }

    /// Drop the last element from the logical range.
    ///
    /// Does nothing on an empty vector. Capacity is unchanged and the
    /// popped value stays in its slot until overwritten.
    pub fn pop_back(&mut self) {
        if self.size > 0 {
            self.size -= 1;
        }
    }

    /// Remove the element at `index`, shifting the tail one slot left.
    ///
    /// Returns the position of the element that now occupies `index`,
    /// which equals the new size when the last element was erased.
    /// Erasing from an empty vector is a no-op that returns `0`, the end
    /// position.
    ///
    /// # Panics
    ///
    /// Panics if the vector is non-empty and `index >= size`.
    pub fn erase(&mut self, index: usize) -> usize {
        if self.size == 0 {
            return 0;
        }
        assert!(
            index < self.size,
            "erase position {index} out of bounds for size {}",
            self.size
        );
        let size = self.size;
        self.buffer.as_mut_slice()[index..size].rotate_left(1);
        self.size -= 1;
        index
    }

    /// Set the size to zero. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Exchange contents (buffer, size and capacity) with `other` in O(1).
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
        mem::swap(&mut self.size, &mut other.size);
    }

    /// Move the contents out, leaving `self` with size 0 and capacity 0.
    pub fn take(&mut self) -> Self {
        Self {
            buffer: self.buffer.take(),
            size: mem::take(&mut self.size),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), VectorError> {
        if index >= self.size {
            return Err(VectorError::OutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Release the storage, handing back the live elements as a `Vec`.
    pub(crate) fn into_vec(mut self) -> Vec<T> {
        let mut elements = self.buffer.release().map(<[T]>::into_vec).unwrap_or_default();
        elements.truncate(self.size);
        elements
    }
}

impl<T: Default> SimpleVector<T> {
    /// Build a vector of `size` default values.
    pub fn with_size(size: usize) -> Self {
        Self {
            buffer: OwnedBuffer::new(size),
            size,
        }
    }

    /// Build an empty vector with the requested capacity already allocated.
    pub fn with_reserve(request: ReserveProxy) -> Self {
        Self {
            buffer: OwnedBuffer::new(request.capacity_to_reserve),
            size: 0,
        }
    }

    /// Append `value`, growing first if the vector is full.
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.relocate(grown_capacity(self.capacity()), None);
        }
        self.buffer[self.size] = value;
        self.size += 1;
    }

    /// Insert `value` at `index`, shifting `[index, size)` one slot right.
    ///
    /// Grows first if the vector is full; in that case the shift happens
    /// while the elements are moved into the new buffer. Returns the
    /// inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > size`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        assert!(
            index <= self.size,
            "insert position {index} out of bounds for size {}",
            self.size
        );
        if self.size == self.capacity() {
            self.relocate(grown_capacity(self.capacity()), Some(index));
        } else {
            let size = self.size;
            self.buffer.as_mut_slice()[index..=size].rotate_right(1);
        }
        self.size += 1;
        let slot = &mut self.buffer[index];
        *slot = value;
        slot
    }

    /// Change the size to `new_size`.
    ///
    /// Shrinking only truncates. Growing within capacity resets the newly
    /// exposed slots to `T::default()`. Growing past capacity reallocates
    /// to exactly `new_size` slots.
    pub fn resize(&mut self, new_size: usize) {
        if new_size <= self.size {
            self.size = new_size;
        } else if new_size <= self.capacity() {
            let size = self.size;
            for slot in &mut self.buffer.as_mut_slice()[size..new_size] {
                *slot = T::default();
            }
            self.size = new_size;
        } else {
            // Fresh slots past the moved elements are already default.
            self.relocate(new_size, None);
            self.size = new_size;
        }
    }

    /// Ensure the capacity is at least `new_capacity`.
    ///
    /// Reallocates to exactly `new_capacity` when it exceeds the current
    /// capacity; otherwise does nothing. The size never changes.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.relocate(new_capacity, None);
        }
    }

    /// Move the live elements into a fresh buffer of `new_capacity` slots.
    ///
    /// With `gap = Some(at)`, elements from `at` onward land one slot to
    /// the right, leaving `at` free for an insert.
    fn relocate(&mut self, new_capacity: usize, gap: Option<usize>) {
        trace!(
            old_capacity = self.capacity(),
            new_capacity,
            size = self.size,
            "reallocating vector storage"
        );
        let size = self.size;
        let mut fresh = OwnedBuffer::new(new_capacity);
        {
            let src = &mut self.buffer.as_mut_slice()[..size];
            let dst = fresh.as_mut_slice();
            match gap {
                None => move_into(&mut dst[..size], src),
                Some(at) => {
                    let (head, tail) = src.split_at_mut(at);
                    move_into(&mut dst[..at], head);
                    move_into(&mut dst[at + 1..=size], tail);
                }
            }
        }
        self.buffer.swap(&mut fresh);
    }
}

/// Move every element of `src` into the matching slot of `dst`.
fn move_into<T: Default>(dst: &mut [T], src: &mut [T]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d = mem::take(s);
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy of the live elements; the copy's capacity equals its size.
impl<T: Clone> Clone for SimpleVector<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: OwnedBuffer::from(self.as_slice().to_vec()),
            size: self.size,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap_with(&mut copy);
    }
}

impl<T> From<ReserveProxy> for SimpleVector<T>
where
    T: Default,
{
    fn from(request: ReserveProxy) -> Self {
        Self::with_reserve(request)
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            size: elements.len(),
            buffer: OwnedBuffer::from(elements),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(elements: &[T]) -> Self {
        Self::from(elements.to_vec())
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Unchecked access: `index` is checked against the allocated region,
/// not the logical size. Use [`SimpleVector::at`] for a checked read.
///
/// # Panics
///
/// Panics if `index >= capacity`.
impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.buffer[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buffer[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq> PartialEq<[T]> for SimpleVector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Lexicographic over the live elements.
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::reserve;

    fn sample() -> SimpleVector<i32> {
        SimpleVector::from([1, 2, 3])
    }

    #[test]
    fn new_is_empty_without_allocation() {
        let v: SimpleVector<i32> = SimpleVector::new();
        assert_eq!(v.size(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
    }

    #[test]
    fn with_size_fills_with_default() {
        let v: SimpleVector<i32> = SimpleVector::with_size(5);
        assert_eq!(v.size(), 5);
        assert_eq!(v.capacity(), 5);
        assert!(v.iter().all(|&x| x == 0));
    }

    #[test]
    fn from_elem_clones_value_into_every_slot() {
        let v = SimpleVector::from_elem(3, String::from("ab"));
        assert_eq!(v.size(), 3);
        assert_eq!(v.capacity(), 3);
        assert!(v.iter().all(|s| s == "ab"));
    }

    #[test]
    fn from_array_sets_size_and_capacity() {
        let v = sample();
        assert_eq!(v.size(), 3);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn with_reserve_allocates_without_size() {
        let v: SimpleVector<i32> = SimpleVector::with_reserve(reserve(10));
        assert_eq!(v.size(), 0);
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn push_back_doubles_capacity() {
        let mut v = SimpleVector::new();
        let mut caps = Vec::new();
        for i in 0..9 {
            v.push_back(i);
            caps.push(v.capacity());
        }
        assert_eq!(caps, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn push_back_moves_non_copy_values() {
        let mut v = SimpleVector::new();
        v.push_back(String::from("a"));
        v.push_back(String::from("b"));
        v.push_back(String::from("c"));
        assert_eq!(v, [String::from("a"), String::from("b"), String::from("c")]);
    }

    #[test]
    fn insert_shifts_within_capacity() {
        let mut v = SimpleVector::with_reserve(reserve(8));
        v.extend([1, 2, 3]);
        *v.insert(1, 99) += 1;
        assert_eq!(v, [1, 100, 2, 3]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn insert_into_full_vector_grows_and_shifts() {
        let mut v = sample();
        let inserted = *v.insert(1, 99);
        assert_eq!(inserted, 99);
        assert_eq!(v, [1, 99, 2, 3]);
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn insert_at_front_and_end() {
        let mut v = sample();
        v.insert(0, 0);
        let end = v.size();
        v.insert(end, 4);
        assert_eq!(v, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn insert_into_empty_sets_capacity_one() {
        let mut v = SimpleVector::new();
        v.insert(0, 'x');
        assert_eq!(v.size(), 1);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    #[should_panic(expected = "insert position")]
    fn insert_past_end_panics() {
        let mut v = sample();
        v.insert(4, 0);
    }

    #[test]
    fn erase_shifts_left_and_returns_position() {
        let mut v = SimpleVector::from([1, 99, 2, 3]);
        assert_eq!(v.erase(1), 1);
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn erase_last_returns_end() {
        let mut v = sample();
        assert_eq!(v.erase(2), 2);
        assert_eq!(v.size(), 2);
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn erase_on_empty_is_noop_at_end() {
        let mut v: SimpleVector<i32> = SimpleVector::new();
        assert_eq!(v.erase(0), 0);
        assert!(v.is_empty());
    }

    #[test]
    #[should_panic(expected = "erase position")]
    fn erase_past_end_panics() {
        let mut v = sample();
        v.erase(3);
    }

    #[test]
    fn pop_back_keeps_capacity_and_ignores_empty() {
        let mut v = sample();
        v.pop_back();
        assert_eq!(v, [1, 2]);
        assert_eq!(v.capacity(), 3);
        v.pop_back();
        v.pop_back();
        v.pop_back();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut v = sample();
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn resize_truncates() {
        let mut v = SimpleVector::from([1, 2, 3, 4, 5]);
        v.resize(2);
        assert_eq!(v, [1, 2]);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn resize_within_capacity_resets_exposed_slots() {
        let mut v = SimpleVector::from([1, 2, 3, 4]);
        v.resize(1);
        v.resize(3);
        assert_eq!(v, [1, 0, 0]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn resize_past_capacity_grows_exactly() {
        let mut v = sample();
        v.resize(7);
        assert_eq!(v, [1, 2, 3, 0, 0, 0, 0]);
        assert_eq!(v.capacity(), 7);
    }

    #[test]
    fn reserve_only_grows() {
        let mut v = sample();
        v.reserve(2);
        assert_eq!(v.capacity(), 3);
        v.reserve(10);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn at_checks_logical_size() {
        let mut v = sample();
        assert_eq!(v.at(2), Ok(&3));
        assert_eq!(v.at(3), Err(VectorError::OutOfRange { index: 3, size: 3 }));
        assert!(v.at(4).is_err());
        *v.at_mut(0).unwrap() = 10;
        assert_eq!(v[0], 10);
        assert!(v.at_mut(3).is_err());
    }

    #[test]
    fn at_after_pop_rejects_stale_slot() {
        let mut v = sample();
        v.pop_back();
        assert!(v.at(2).is_err());
    }

    #[test]
    fn index_reaches_spare_slots() {
        let mut v: SimpleVector<i32> = SimpleVector::with_reserve(reserve(2));
        v[1] = 5;
        assert_eq!(v[1], 5);
        assert!(v.is_empty());
    }

    #[test]
    fn clone_is_deep_and_trims_capacity() {
        let mut v = SimpleVector::with_reserve(reserve(8));
        v.extend([1, 2, 3]);
        let mut copy = v.clone();
        assert_eq!(copy.capacity(), 3);
        copy[0] = 100;
        copy.push_back(4);
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(copy, [100, 2, 3, 4]);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let src = sample();
        let mut dst = SimpleVector::from([9, 9, 9, 9, 9]);
        dst.clone_from(&src);
        assert_eq!(dst, src);
        assert_eq!(dst.capacity(), 3);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut src = sample();
        let dst = src.take();
        assert_eq!(dst, [1, 2, 3]);
        assert_eq!(src.size(), 0);
        assert_eq!(src.capacity(), 0);
    }

    #[test]
    fn swap_with_exchanges_everything() {
        let mut a = sample();
        let mut b = SimpleVector::with_reserve(reserve(10));
        b.push_back(7);
        a.swap_with(&mut b);
        assert_eq!(a, [7]);
        assert_eq!(a.capacity(), 10);
        assert_eq!(b, [1, 2, 3]);
        assert_eq!(b.capacity(), 3);
    }

    #[test]
    fn comparisons_ignore_capacity() {
        let a = sample();
        let mut b: SimpleVector<i32> = SimpleVector::with_reserve(reserve(16));
        b.extend(&[1, 2, 3]);
        assert_eq!(a, b);
        assert!(a <= b && a >= b);

        let c = SimpleVector::from([1, 2, 4]);
        assert!(a < c);
        assert!(c > a);
        assert_ne!(a, c);

        let prefix = SimpleVector::from([1, 2]);
        assert!(prefix < a);
        assert_eq!(prefix.cmp(&a), Ordering::Less);
    }

    #[test]
    fn debug_prints_live_elements_only() {
        let mut v = sample();
        v.pop_back();
        assert_eq!(format!("{v:?}"), "[1, 2]");
    }

    #[test]
    fn hash_matches_slice_hash() {
        use std::collections::hash_map::DefaultHasher;

        let mut v = SimpleVector::from([1, 2, 3, 4]);
        v.pop_back();
        let mut h1 = DefaultHasher::new();
        v.hash(&mut h1);
        let mut h2 = DefaultHasher::new();
        [1, 2, 3][..].hash(&mut h2);
        assert_eq!(h1.finish(), h2.finish());
    }

    #[test]
    fn deref_exposes_slice_api() {
        let mut v = SimpleVector::from([3, 1, 2]);
        v.sort();
        assert_eq!(v.first(), Some(&1));
        assert_eq!(v.len(), 3);
        assert_eq!(v.iter().sum::<i32>(), 6);
    }

    #[test]
    fn collect_from_iterator() {
        let v: SimpleVector<i32> = (1..=4).collect();
        assert_eq!(v, [1, 2, 3, 4]);
        assert_eq!(v.capacity(), 4);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn insert_then_erase_restores(
                items in proptest::collection::vec(any::<i32>(), 0..32),
                pos_seed in any::<usize>(),
                value in any::<i32>(),
            ) {
                let mut v = SimpleVector::from(items.clone());
                let pos = pos_seed % (items.len() + 1);
                v.insert(pos, value);
                prop_assert_eq!(v.size(), items.len() + 1);
                prop_assert_eq!(v[pos], value);
                v.erase(pos);
                prop_assert_eq!(v.as_slice(), items.as_slice());
            }

            #[test]
            fn push_back_capacity_is_power_of_two(count in 1usize..200) {
                let mut v = SimpleVector::new();
                for i in 0..count {
                    v.push_back(i);
                }
                prop_assert_eq!(v.size(), count);
                prop_assert_eq!(v.capacity(), count.next_power_of_two());
            }

            #[test]
            fn ordering_matches_slices(
                a in proptest::collection::vec(0u8..4, 0..8),
                b in proptest::collection::vec(0u8..4, 0..8),
            ) {
                let va = SimpleVector::from(a.clone());
                let vb = SimpleVector::from(b.clone());
                prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
                prop_assert_eq!(va == vb, a == b);
            }

            #[test]
            fn mutating_clone_leaves_original(
                items in proptest::collection::vec(any::<i64>(), 1..32),
                extra in any::<i64>(),
            ) {
                let original = SimpleVector::from(items.clone());
                let mut copy = original.clone();
                copy[0] = copy[0].wrapping_add(1);
                copy.push_back(extra);
                copy.erase(0);
                prop_assert_eq!(original.as_slice(), items.as_slice());
            }
        }
    }
}
