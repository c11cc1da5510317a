//! Finalization pipeline: the eight phases that turn the absorbed state `h`
//! into the 40-byte digest, per the BIG-box/LITTLE-box finalization network.
//!
//! This is the largest single component of the algorithm (BIG-box
//! orchestration, multiple output-mixing rounds, digest emission) and is kept
//! separate from [`crate::hasher`]'s buffer/streaming bookkeeping so each can
//! be read on its own.

use crate::big_box::big_box_execute;
use crate::constants::{BIG_BOX_COUNT, HASH_SIZE, STATE_WORDS};
use crate::mixers::extra_mix;
use crate::primitives::{rotl64, rotr64, u64_to_bytes};

/// Phase 1: drive the five BIG boxes from the current state, unchanged
/// between calls (each BIG box re-derives its own salt from `h`, but `h`
/// itself is not mutated by this phase).
#[must_use]
fn big_box_phase(h: &[u64; STATE_WORDS]) -> [[u64; STATE_WORDS]; BIG_BOX_COUNT] {
    core::array::from_fn(|bb| big_box_execute(h, bb, (bb as u64) * 2000))
}

/// Phase 2: state scramble, independent of the BIG-box state.
fn state_scramble(h: &mut [u64; STATE_WORDS]) {
    const ROT_PARAMS: [u32; STATE_WORDS] = [31, 27, 33, 23, 29];

    for i in 0..STATE_WORDS {
        let mut x = h[i];
        x ^= rotr64(x, ROT_PARAMS[i]);
        x = x.wrapping_mul(0x510E_9BB7_9275_22F5);
        x = x.wrapping_add(0x243F_6A88_85A3_08D3);
        x ^= rotr64(x, ROT_PARAMS[(i + 1) % STATE_WORDS]);
        x = x.wrapping_mul(0xA076_1D64_7ABD_642F);
        x ^= x >> 23;
        x ^= x >> 38;
        h[i] = x;
    }
}

/// Phase 3: fold the BIG-box state back into `h`. Every lane reads the
/// pre-phase `h[i]`; the fold is written into a scratch array and copied
/// back only once all five lanes are done, matching the reference's
/// "compute `final_mix`, then copy into `h`" order.
fn big_box_fold(h: &mut [u64; STATE_WORDS], big_box_state: &[[u64; STATE_WORDS]; BIG_BOX_COUNT]) {
    let mut final_mix = [0u64; STATE_WORDS];
    for i in 0..STATE_WORDS {
        let mut acc = h[i];
        for row in big_box_state {
            acc ^= row[i];
            acc = rotr64(acc, 19) ^ rotl64(acc, 37);
            acc = acc.wrapping_add(row[(i + 2) % STATE_WORDS]);
            acc = acc.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        }
        acc ^= acc >> 29;
        acc = acc.wrapping_mul(0xBF58_476D_1CE4_E5B9);
        acc ^= acc >> 27;
        acc = acc.wrapping_mul(0x94D0_49BB_1331_11EB);
        acc ^= acc >> 31;
        final_mix[i] = acc;
    }
    *h = final_mix;
}

/// Phase 4: three rounds of `extra_mix` interleaved with a BIG-box-state XOR
/// and a growing rotation.
fn extra_mix_phase(h: &mut [u64; STATE_WORDS], big_box_state: &[[u64; STATE_WORDS]; BIG_BOX_COUNT]) {
    for round in 0..3usize {
        for i in 0..STATE_WORDS {
            h[i] = extra_mix(h[i]);
            h[i] ^= big_box_state[round % BIG_BOX_COUNT][i];
            h[i] = rotl64(h[i], 17 + (round as u32) * 5);
        }
    }
}

/// Phase 5: five carousel rounds. Both the `mix` accumulation and the
/// per-lane update observe partially-updated state within a single round,
/// exactly as `process_block` does; the loops must run in this order.
fn carousel(h: &mut [u64; STATE_WORDS]) {
    for _ in 0..5 {
        let mut mix: u64 = 0;
        for i in 0..STATE_WORDS {
            mix ^= h[i];
            mix = rotl64(mix, 17) ^ h[(i + 2) % STATE_WORDS];
        }
        for i in 0..STATE_WORDS {
            h[i] ^= rotl64(mix, (i as u32) * 13);
            h[i] = h[i].wrapping_mul(0x9E37_79B9_7F4A_7C15);
            h[i] ^= h[(i + 1) % STATE_WORDS] >> ((i as u32) * 7 + 3);
            h[i] = rotr64(h[i], 23 + (i as u32) * 5);
        }
    }
}

/// Phase 6: little-endian serialization of `h` into the 40-byte output.
fn serialize(h: &[u64; STATE_WORDS]) -> [u8; HASH_SIZE] {
    let mut output = [0u8; HASH_SIZE];
    for i in 0..STATE_WORDS {
        u64_to_bytes(h[i], &mut output[i * 8..i * 8 + 8]);
    }
    output
}

fn load_words(output: &[u8; HASH_SIZE]) -> [u64; STATE_WORDS] {
    core::array::from_fn(|i| crate::primitives::bytes_to_u64(&output[i * 8..i * 8 + 8]))
}

fn store_words(out: &[u64; STATE_WORDS], output: &mut [u8; HASH_SIZE]) {
    for i in 0..STATE_WORDS {
        u64_to_bytes(out[i], &mut output[i * 8..i * 8 + 8]);
    }
}

/// Phase 7: post-serialization mix A, three rounds of a fold-style mixer
/// over the reinterpreted output words. `acc` and `out[(i+2) % 5]` observe
/// partially-updated state within a round, as in the reference.
fn post_serialize_mix_a(output: &mut [u8; HASH_SIZE]) {
    let mut out = load_words(output);
    for _ in 0..3 {
        let mut acc: u64 = 0;
        for i in 0..STATE_WORDS {
            acc ^= out[i];
            out[i] = rotr64(out[i], 19) ^ rotl64(acc, 37);
            out[i] = out[i].wrapping_mul(0xBF58_476D_1CE4_E5B9);
            out[i] ^= out[(i + 2) % STATE_WORDS] >> 27;
        }
    }
    store_words(&out, output);
}

/// Phase 8: post-serialization mix B, one pass of `extra_mix` folded against
/// a rotated partner lane.
fn post_serialize_mix_b(output: &mut [u8; HASH_SIZE]) {
    let mut out = load_words(output);
    for i in 0..STATE_WORDS {
        out[i] = extra_mix(out[i]);
        out[i] ^= out[(i + 2) % STATE_WORDS];
    }
    store_words(&out, output);
}

/// Run all eight finalize phases over `h` and return the 40-byte digest.
///
/// `h` is consumed by value: callers hold the authoritative buffered state
/// and this function has no further use for it once the digest is produced.
#[must_use]
pub fn run(mut h: [u64; STATE_WORDS]) -> [u8; HASH_SIZE] {
    let big_box_state = big_box_phase(&h);
    state_scramble(&mut h);
    big_box_fold(&mut h, &big_box_state);
    extra_mix_phase(&mut h, &big_box_state);
    carousel(&mut h);

    let mut output = serialize(&h);
    post_serialize_mix_a(&mut output);
    post_serialize_mix_b(&mut output);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_is_deterministic() {
        let h = [1u64, 2, 3, 4, 5];
        assert_eq!(run(h), run(h));
    }

    #[test]
    fn run_is_sensitive_to_state() {
        let a = run([1u64, 2, 3, 4, 5]);
        let b = run([1u64, 2, 3, 4, 6]);
        assert_ne!(a, b);
    }

    #[test]
    fn run_produces_forty_bytes() {
        assert_eq!(run([0u64; STATE_WORDS]).len(), HASH_SIZE);
    }

    #[test]
    fn state_scramble_changes_every_lane() {
        let mut h = [1u64, 2, 3, 4, 5];
        let before = h;
        state_scramble(&mut h);
        for i in 0..STATE_WORDS {
            assert_ne!(h[i], before[i], "lane {i} unchanged by state_scramble");
        }
    }

    #[test]
    fn carousel_changes_state() {
        let mut h = [1u64, 2, 3, 4, 5];
        let before = h;
        carousel(&mut h);
        assert_ne!(h, before);
    }

    #[test]
    fn post_serialize_mixes_change_output() {
        let mut output = [0u8; HASH_SIZE];
        output[0] = 1;
        let before = output;
        post_serialize_mix_a(&mut output);
        assert_ne!(output, before);
        let after_a = output;
        post_serialize_mix_b(&mut output);
        assert_ne!(output, after_a);
    }
}
