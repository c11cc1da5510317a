//! One-shot convenience API.

use crate::constants::HASH_SIZE;
use crate::hasher::Hasher;

/// Compute the 40-byte digest of `data` in one call.
///
/// Equivalent to `{ let mut h = Hasher::new(); h.update(data); h.finalize() }`
/// — there is no separate one-shot code path or extra mixing step; streaming
/// and one-shot hashing always agree for the same bytes.
#[must_use]
pub fn hash(data: &[u8]) -> [u8; HASH_SIZE] {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
