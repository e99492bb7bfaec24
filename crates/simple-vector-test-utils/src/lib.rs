//! Test utilities for `simple-vector` development.
//!
//! Provides [`Tracked`], an element type that reports its clones and drops
//! to a shared [`DropLedger`]. Containers under test can then be checked
//! for deep copies, exactly-once destruction, and growth that moves
//! elements instead of cloning them.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod tracked;

pub use tracked::{DropLedger, Tracked};
