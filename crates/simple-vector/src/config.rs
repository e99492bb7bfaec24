//! Growth policy and capacity reservation requests.

/// Factor applied to the capacity when a full vector must grow.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity allocated by the first growth of an empty vector.
pub const MIN_CAPACITY: usize = 1;

/// Capacity to grow to when a vector of `current` capacity is full.
///
/// Doubles, with a floor of [`MIN_CAPACITY`]: 0, 1, 2, 4, 8, ...
///
/// # Panics
///
/// Panics on capacity overflow, which is treated like any other
/// allocation failure.
pub fn grown_capacity(current: usize) -> usize {
    current
        .checked_mul(GROWTH_FACTOR)
        .expect("capacity overflow")
        .max(MIN_CAPACITY)
}

/// Request to build an empty vector with pre-allocated storage.
///
/// Consumed by [`SimpleVector::with_reserve`](crate::SimpleVector::with_reserve).
/// Usually produced by the free function [`reserve`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReserveProxy {
    /// Number of element slots to allocate up front.
    pub capacity_to_reserve: usize,
}

impl ReserveProxy {
    /// Create a request for `capacity_to_reserve` slots.
    pub fn new(capacity_to_reserve: usize) -> Self {
        Self {
            capacity_to_reserve,
        }
    }
}

/// Build a [`ReserveProxy`] for `capacity_to_reserve` slots.
///
/// ```rust
/// use simple_vector::{reserve, SimpleVector};
///
/// let v: SimpleVector<i32> = reserve(16).into();
/// assert_eq!(v.capacity(), 16);
/// assert!(v.is_empty());
/// ```
pub fn reserve(capacity_to_reserve: usize) -> ReserveProxy {
    ReserveProxy::new(capacity_to_reserve)
}
