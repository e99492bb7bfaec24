//! Exclusively-owned element storage for `simple-vector`.
//!
//! This is the leaf crate with zero internal dependencies. It provides
//! [`OwnedBuffer`], a move-only handle around a single contiguous heap
//! block of `T`. The buffer knows nothing about logical length; it only
//! tracks the physical allocation.
//!
//! # Safety model
//!
//! Every slot in an allocation holds a fully constructed `T`. Fresh
//! blocks are filled with `T::default()`, so there is no `MaybeUninit`
//! and no `unsafe` anywhere in the crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;

pub use buffer::OwnedBuffer;
