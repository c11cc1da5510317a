//! `Lane4`: a plain 4-word vector abstraction standing in for the reference
//! algorithm's 256-bit SIMD register. Every operation here is defined
//! lane-wise in scalar Rust; real hardware-SIMD backends must reproduce
//! these exact semantics (see the LITTLE-box engine's module docs) but none
//! is implemented in this crate — see the purpose-and-scope non-goals.

use crate::primitives::{rotl64, rotr64};

/// Four 64-bit lanes, mirroring a 256-bit SIMD register's scalar semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Lane4(pub [u64; 4]);

impl Lane4 {
    /// All-zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0; 4])
    }

    /// A vector with every lane set to `v` (a SIMD "broadcast").
    #[must_use]
    pub const fn broadcast(v: u64) -> Self {
        Self([v, v, v, v])
    }

    /// Read lane `i`.
    #[must_use]
    pub const fn lane(self, i: usize) -> u64 {
        self.0[i]
    }

    /// Lane-wise wrapping add.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i].wrapping_add(other.0[i])))
    }

    /// Broadcast-add a scalar to every lane.
    #[must_use]
    pub fn add_scalar(self, s: u64) -> Self {
        self.add(Self::broadcast(s))
    }

    /// Lane-wise XOR.
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] ^ other.0[i]))
    }

    /// Lane-wise wrapping multiply by a broadcast scalar.
    #[must_use]
    pub fn mul_scalar(self, s: u64) -> Self {
        Self(core::array::from_fn(|i| self.0[i].wrapping_mul(s)))
    }

    /// Lane-wise rotate-left by the same amount in every lane.
    #[must_use]
    pub fn rotl(self, n: u32) -> Self {
        Self(core::array::from_fn(|i| rotl64(self.0[i], n)))
    }

    /// Lane-wise rotate-right by the same amount in every lane.
    #[must_use]
    pub fn rotr(self, n: u32) -> Self {
        Self(core::array::from_fn(|i| rotr64(self.0[i], n)))
    }

    /// Select lanes according to `order`: `out[i] = self[order[i]]`.
    #[must_use]
    pub fn permute(self, order: [usize; 4]) -> Self {
        Self(order.map(|idx| self.0[idx]))
    }
}

/// Lane order for immediate `0x4E`: `(1, 0, 3, 2)`.
pub const PERM_0X4E: [usize; 4] = [1, 0, 3, 2];
/// Lane order for immediate `0xB1`: `(2, 3, 0, 1)`.
pub const PERM_0XB1: [usize; 4] = [2, 3, 0, 1];

/// `mix_lanes(v)`: a fixed two-permutation diffusion step shared by
/// `arx_mix_vector` and `horizontal_xor`.
///
/// Note that because any permutation of a uniform (all-lanes-equal) vector
/// returns that same vector, `mix_lanes` collapses a broadcast input to the
/// zero vector. This is a real, faithfully-reproduced property of the
/// reference algorithm's `horizontal_xor`, not a defect in this port — see
/// that function's doc comment.
#[must_use]
pub fn mix_lanes(v: Lane4) -> Lane4 {
    let p0 = v.permute(PERM_0X4E);
    let p1 = p0.permute(PERM_0XB1);
    let x = p0.xor(p1);
    let r = x.rotl(17);
    x.xor(r)
}
