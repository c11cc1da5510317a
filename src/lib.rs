#![cfg_attr(not(feature = "std"), no_std)]

//! # XzalgoChain
//!
//! A 320-bit keyless hash function: a 128-byte-block ARX absorption phase
//! feeding a two-level BIG-box/LITTLE-box finalization network, followed by a
//! post-serialization output mix. Deterministic and total — given any byte
//! sequence it produces a 40-byte digest, with no key, IV, personalisation,
//! or tree mode.
//!
//! This is **not** claimed to be cryptographically secure. It is an
//! exactly-reproducible implementation of a defined algorithm.
//!
//! # Usage
//!
//! One-shot:
//!
//! ```rust
//! let digest = xzalgochain::hash(b"hello, world");
//! assert_eq!(digest.len(), 40);
//! ```
//!
//! Streaming — absorbing chunks produces the same digest as absorbing the
//! concatenation in one call:
//!
//! ```rust
//! use xzalgochain::Hasher;
//!
//! let mut hasher = Hasher::new();
//! hasher.update(b"hello, ");
//! hasher.update(b"world");
//! let digest = hasher.finalize();
//!
//! assert_eq!(digest, xzalgochain::hash(b"hello, world"));
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod big_box;
pub mod block;
pub mod constants;
pub mod engine;
pub mod error;
#[cfg(feature = "digest-trait")]
mod digest_impl;
pub mod lane4;
pub mod little_box;
pub mod mixers;
mod hasher;
mod finalize;
mod oneshot;
pub mod primitives;
pub mod salt;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use constants::HASH_SIZE;
pub use engine::{current_variant, set_variant, LittleBoxVariant};
pub use error::HasherMisuseError;
pub use hasher::Hasher;
pub use oneshot::hash;
