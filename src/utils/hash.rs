//! Content hashing using FxHash.
//!
//! Used to skip config reloads when a file event did not change the bytes
//! (editors often touch or rewrite files without changing them).

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}
