//! A growable contiguous array built on an exclusively-owned buffer.
//!
//! [`SimpleVector`] tracks a logical size on top of an [`OwnedBuffer`]
//! whose length is the capacity. When the buffer is full it is replaced
//! by one twice as large (minimum one slot) and the elements are moved
//! across in a single pass.
//!
//! # Architecture
//!
//! ```text
//! SimpleVector<T>
//! ├── OwnedBuffer<T>   (simple-vector-buffer: capacity slots, move-only)
//! └── size             (elements [0, size) are live, [size, capacity) are spare)
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use simple_vector::{reserve, SimpleVector};
//!
//! let mut v = SimpleVector::from([1, 2, 3]);
//! v.insert(1, 99);
//! assert_eq!(v, [1, 99, 2, 3]);
//! v.erase(1);
//! assert_eq!(v, [1, 2, 3]);
//!
//! let mut r: SimpleVector<u32> = SimpleVector::with_reserve(reserve(10));
//! assert_eq!((r.size(), r.capacity()), (0, 10));
//! r.push_back(7);
//! assert_eq!(r.capacity(), 10);
//! ```
//!
//! Spare slots hold real `T` values (default-valued or left over from
//! earlier pops and erases); they are dropped when overwritten or when the
//! buffer is released. Every element type that needs fresh storage must
//! therefore implement [`Default`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod iter;
pub mod vector;

// Public re-exports for the primary API surface.
pub use config::{reserve, ReserveProxy};
pub use error::VectorError;
pub use iter::IntoIter;
pub use simple_vector_buffer::OwnedBuffer;
pub use vector::SimpleVector;
