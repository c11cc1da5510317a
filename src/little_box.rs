//! LITTLE-box engine: the scalar reference semantics of §4.4. Processes
//! groups of up to 4 ten-word bundles at a time, matching the reference's
//! batch-of-4 SIMD-register convention. Any hardware-accelerated variant of
//! this routine must be observably equivalent to what is implemented here
//! for every input (same digest) — see [`crate::engine`].

use crate::constants::RC;
use crate::lane4::{mix_lanes, Lane4};
use crate::primitives::{rotl64, rotr64};

/// `arx_mix_vector(v, salt, rc, r1, r2)`.
#[must_use]
fn arx_mix_vector(v: Lane4, salt: u64, rc: Lane4, r1: u32, r2: u32) -> Lane4 {
    let mut v = v.add_scalar(salt);
    v = v.xor(rc);
    v = v.add(v.rotl(r1));
    v = v.xor(v.rotr(r2));
    v = mix_lanes(v);
    v.mul_scalar(0x8000_0000_0000_808A)
}

/// `horizontal_xor(v)`: reduces a 4-lane vector to a single scrambled word.
///
/// When called on a broadcast (all-lanes-equal) vector — which is how the
/// LITTLE-box write-back invokes it for `B[9]` — the leading `mix_lanes`
/// call collapses the input to zero (see [`mix_lanes`]'s doc comment), and
/// every following step of this function preserves that zero. `B[9]` is
/// therefore always `0` in this algorithm; that is reproduced faithfully
/// rather than "fixed", since the reference algorithm makes no claim to
/// cryptographic strength.
#[must_use]
fn horizontal_xor(v: Lane4) -> u64 {
    let mut v = mix_lanes(v);
    v = v.xor(v.permute(crate::lane4::PERM_0X4E));
    v = v.xor(v.permute(crate::lane4::PERM_0X4E));
    v = v.xor(v.permute(crate::lane4::PERM_0XB1));

    let mut r = v.lane(0) ^ v.lane(1) ^ v.lane(2) ^ v.lane(3);
    r ^= r >> 31;
    r = r.wrapping_mul(0x0000_0000_0000_0088);
    r ^= r >> 29;
    r = r.wrapping_mul(0x8000_0000_0000_8089);
    r ^= r >> 32;
    r = rotr64(r, 17) ^ rotl64(r, 43);
    r = r.wrapping_mul(0x8000_0000_8000_8081);
    r ^= r >> 27;
    r
}

fn rc_quad(base: u64) -> Lane4 {
    Lane4([
        RC[(base & 127) as usize],
        RC[((base + 1) & 127) as usize],
        RC[((base + 2) & 127) as usize],
        RC[((base + 3) & 127) as usize],
    ])
}

/// Process `bundles` in groups of 4 under `salt` and `round_base`.
///
/// `bundles.len()` (`num_blocks`) need not be a multiple of 4: a trailing
/// partial group is handled per §4.4 (missing blocks contribute nothing and
/// the cross-block mix is skipped for that group).
pub fn execute(bundles: &mut [[u64; 10]], salt: u64, round_base: u64) {
    let num_blocks = bundles.len();
    let mut blk = 0usize;

    while blk < num_blocks {
        let present: [bool; 4] = core::array::from_fn(|i| blk + i < num_blocks);
        let read = |i: usize, word: usize| -> u64 {
            if blk + i < num_blocks {
                bundles[blk + i][word]
            } else {
                0
            }
        };

        let mut v0 = Lane4([read(0, 1), read(1, 1), read(2, 1), read(3, 1)]);
        let mut v0l = Lane4([read(0, 0), read(1, 0), read(2, 0), read(3, 0)]);
        let mut v1 = Lane4([read(0, 5), read(1, 5), read(2, 5), read(3, 5)]);
        let mut v1l = Lane4([read(0, 4), read(1, 4), read(2, 4), read(3, 4)]);
        let mut v2 = Lane4([read(0, 9), read(1, 9), read(2, 9), read(3, 9)]);
        let mut v2l = Lane4([read(0, 8), read(1, 8), read(2, 8), read(3, 8)]);

        let rc0 = rc_quad(round_base);
        let rc1 = rc_quad(round_base + 4);
        let rc2 = rc_quad(round_base + 8);

        v0 = arx_mix_vector(v0, salt, rc0, 7, 13);
        v0l = arx_mix_vector(v0l, salt, rc0, 7, 13);
        v1 = arx_mix_vector(v1, salt, rc1, 11, 17);
        v1l = arx_mix_vector(v1l, salt, rc1, 11, 17);
        v2 = arx_mix_vector(v2, salt, rc2, 19, 23);
        v2l = arx_mix_vector(v2l, salt, rc2, 19, 23);

        v0 = mix_lanes(v0);
        v0l = mix_lanes(v0l);
        v1 = mix_lanes(v1);
        v1l = mix_lanes(v1l);
        v2 = mix_lanes(v2);
        v2l = mix_lanes(v2l);

        let mut b9 = [0u64; 4];
        for (k, present_k) in present.iter().enumerate() {
            if !present_k {
                continue;
            }
            // Blocks 0/1 write back from the high-triplet vectors at lanes
            // (0,1)/(2,3); blocks 2/3 write back from the low-triplet
            // vectors, again at lanes (0,1)/(2,3) of that triplet.
            let (t0, t1, t2, local) = if k < 2 { (v0, v1, v2, k) } else { (v0l, v1l, v2l, k - 2) };
            let lo_lane = 2 * local;
            let hi_lane = 2 * local + 1;

            bundles[blk + k][0] = t0.lane(lo_lane);
            bundles[blk + k][1] = t0.lane(hi_lane);
            bundles[blk + k][4] = t1.lane(lo_lane);
            bundles[blk + k][5] = t1.lane(hi_lane);
            bundles[blk + k][8] = t2.lane(lo_lane);

            // acc_k always broadcasts from the high triplet at lane k,
            // regardless of which triplet fed B[0..8] for this block.
            let acc = v0.lane(k) ^ v1.lane(k) ^ v2.lane(k);
            let h = horizontal_xor(Lane4::broadcast(acc));
            bundles[blk + k][9] = h;
            b9[k] = h;
        }

        if present[3] {
            let mut mix = b9[0] ^ b9[1] ^ b9[2] ^ b9[3];
            mix = rotr64(mix, 17) ^ rotl64(mix, 43);
            mix = mix.wrapping_mul(0x9E37_79B9_7F4A_7C15);
            bundles[blk][9] ^= mix;
            bundles[blk + 1][9] ^= rotr64(mix, 11);
            bundles[blk + 2][9] ^= rotl64(mix, 23);
            bundles[blk + 3][9] ^= mix ^ (mix >> 31);
        }

        blk += 4;
    }
}
