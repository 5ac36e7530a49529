//! `alloc`/`std` re-exports so the rest of the crate writes one import
//! regardless of which feature is active.

#[cfg(not(feature = "std"))]
pub use alloc::vec::Vec;

#[cfg(feature = "std")]
pub use std::vec::Vec;

/// A zero-filled byte buffer of the given length, used wherever the
/// protocol engine needs a scratch buffer before squeezing into it.
pub(crate) fn zero_vec(len: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(len);
    buf.resize(len, 0u8);
    buf
}
