//! Benchmark inputs for `simple-vector`.
//!
//! - [`filled`]: a vector of `0..len` with capacity equal to its size
//! - [`positions`]: deterministic pseudo-random positions via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use simple_vector::SimpleVector;

/// A full vector holding `0..len`; the next push reallocates.
pub fn filled(len: usize) -> SimpleVector<u64> {
    (0..len as u64).collect()
}

/// `count` positions in `[0, len]`, reproducible for a given `seed`.
///
/// Suitable as insert positions into a vector of size `len`.
pub fn positions(len: usize, count: usize, seed: u64) -> Vec<usize> {
    (0..count as u64)
        .map(|i| {
            let mixed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            ((mixed >> 33) % (len as u64 + 1)) as usize
        })
        .collect()
}
