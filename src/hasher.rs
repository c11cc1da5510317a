//! Streaming context: absorption buffer management and the `init` / `update`
//! / `finalize` lifecycle.

use zeroize::Zeroize;

use crate::constants::{BLOCK_SIZE, BLOCK_WORDS, HASH_SIZE, STATE_WORDS};
use crate::error::HasherMisuseError;
use crate::primitives::{bytes_to_u64, rotl64};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContextState {
    Live,
    Finalized,
}

/// Streaming hash context.
///
/// `Hasher` is single-owner and single-threaded: no operation on one context
/// may run concurrently with any other operation on the same context.
/// Distinct contexts are independent. A context is born live, accepts any
/// number of [`update`](Hasher::update) calls, and is consumed by exactly one
/// [`finalize`](Hasher::finalize); after that its storage is zeroed and
/// further `update`/`finalize` calls are a programming error (they panic —
/// call [`reset`](Hasher::reset) to reuse the allocation).
#[derive(Clone)]
pub struct Hasher {
    h: [u64; STATE_WORDS],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    total_bits: u64,
    state: ContextState,
}

fn init_state() -> [u64; STATE_WORDS] {
    let mut h = [
        0xBB67_AE85_4A7D_9E31,
        0x5BE0_CD19_B7F3_A69C,
        0x6A09_E667_F2B5_C8D3,
        0x3C6E_F372_D8B4_F1A6,
        0x510E_527F_4D8C_3A92,
    ];
    h[0] ^= 0x9E37_79B9_7F4A_7C15;
    h[1] ^= 0xBF58_476D_1CE4_E5B9;
    h[2] ^= 0x94D0_49BB_1331_11EB;

    for i in 0..STATE_WORDS {
        h[i] ^= crate::constants::RC[i * 10];
        h[i] = rotl64(h[i], 17 + (i as u32) * 7);
        h[i] = h[i].wrapping_mul(0x9E37_79B9_7F4A_7C15);
        h[i] ^= h[(i + 2) % STATE_WORDS];
    }
    h
}

fn load_block(bytes: &[u8]) -> [u64; BLOCK_WORDS] {
    core::array::from_fn(|i| bytes_to_u64(&bytes[i * 8..i * 8 + 8]))
}

impl Hasher {
    /// Create a context in the initial state (§4.7 `init`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            h: init_state(),
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            total_bits: 0,
            state: ContextState::Live,
        }
    }

    fn assert_live(&self, operation: &'static str) {
        if self.state == ContextState::Finalized {
            panic!("{}", HasherMisuseError::new(operation));
        }
    }

    fn absorb_block(&mut self, block_bytes: &[u8]) {
        let block = load_block(block_bytes);
        crate::block::process_block(&mut self.h, &block);
    }

    /// Absorb `data`. `update(a); update(b)` is equivalent to `update(a ||
    /// b)`: any partition of a byte sequence into update calls produces the
    /// same digest as absorbing it in one call.
    ///
    /// # Panics
    /// Panics if the context has already been [`finalize`](Hasher::finalize)d.
    pub fn update(&mut self, data: &[u8]) {
        self.assert_live("update");
        self.total_bits = self
            .total_bits
            .wrapping_add((data.len() as u64).wrapping_mul(8));

        let mut rest = data;

        if self.buffer_len > 0 {
            let need = BLOCK_SIZE - self.buffer_len;
            let take = need.min(rest.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&rest[..take]);
            self.buffer_len += take;
            rest = &rest[take..];

            if self.buffer_len == BLOCK_SIZE {
                let block = self.buffer;
                self.absorb_block(&block);
                self.buffer_len = 0;
            }
        }

        while rest.len() >= BLOCK_SIZE {
            self.absorb_block(&rest[..BLOCK_SIZE]);
            rest = &rest[BLOCK_SIZE..];
        }

        if !rest.is_empty() {
            self.buffer[..rest.len()].copy_from_slice(rest);
            self.buffer_len = rest.len();
        }

        debug_assert!(self.buffer_len < BLOCK_SIZE);
    }

    /// Pad the buffer and absorb the final block. No length encoding is
    /// appended (see the crate-level docs' open-questions note): the only
    /// padding is a `0x80` marker followed by zero bytes to the block
    /// boundary.
    fn pad_and_absorb(&mut self) {
        self.buffer[self.buffer_len] = 0x80;
        for b in &mut self.buffer[self.buffer_len + 1..BLOCK_SIZE] {
            *b = 0;
        }
        let block = self.buffer;
        self.absorb_block(&block);
        self.buffer_len = 0;
    }

    fn wipe(&mut self) {
        self.h.zeroize();
        self.buffer.zeroize();
        self.buffer_len.zeroize();
        self.total_bits.zeroize();
    }

    /// Run padding and all eight finalize phases, producing the 40-byte
    /// digest. The context's storage is zeroed before returning and the
    /// context transitions to the finalized state; call [`reset`](Hasher::reset)
    /// to drive it again.
    ///
    /// # Panics
    /// Panics if the context has already been finalized.
    #[must_use]
    pub fn finalize(&mut self) -> [u8; HASH_SIZE] {
        self.assert_live("finalize");
        self.pad_and_absorb();
        let digest = crate::finalize::run(self.h);
        self.wipe();
        self.state = ContextState::Finalized;
        digest
    }

    /// Return the context to a fresh live state, as if newly constructed.
    pub fn reset(&mut self) {
        self.wipe();
        self.h = init_state();
        self.state = ContextState::Live;
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Hasher {
    fn drop(&mut self) {
        self.wipe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streaming_matches_one_shot_for_small_inputs() {
        let data = b"abc";
        let mut h1 = Hasher::new();
        h1.update(data);
        let d1 = h1.finalize();

        let mut h2 = Hasher::new();
        h2.update(&data[..1]);
        h2.update(&data[1..]);
        let d2 = h2.finalize();

        assert_eq!(d1, d2);
    }

    #[test]
    fn streaming_matches_one_shot_across_block_boundary() {
        let data = vec![7u8; 300];
        let mut h1 = Hasher::new();
        h1.update(&data);
        let d1 = h1.finalize();

        let mut h2 = Hasher::new();
        for chunk in data.chunks(37) {
            h2.update(chunk);
        }
        let d2 = h2.finalize();

        assert_eq!(d1, d2);
    }

    #[test]
    fn buffer_len_is_always_below_block_size_after_update() {
        let mut h = Hasher::new();
        for size in [0usize, 1, 127, 128, 129, 255, 256, 257] {
            h.reset();
            h.update(&vec![0u8; size]);
            assert!(h.buffer_len < BLOCK_SIZE);
        }
    }

    #[test]
    fn finalize_zeroes_context_storage() {
        let mut h = Hasher::new();
        h.update(b"some input");
        let _ = h.finalize();
        assert_eq!(h.h, [0u64; STATE_WORDS]);
        assert_eq!(h.buffer, [0u8; BLOCK_SIZE]);
        assert_eq!(h.buffer_len, 0);
        assert_eq!(h.total_bits, 0);
    }

    #[test]
    #[should_panic(expected = "update")]
    fn update_after_finalize_panics() {
        let mut h = Hasher::new();
        let _ = h.finalize();
        h.update(b"x");
    }

    #[test]
    #[should_panic(expected = "finalize")]
    fn finalize_after_finalize_panics() {
        let mut h = Hasher::new();
        let _ = h.finalize();
        let _ = h.finalize();
    }

    #[test]
    fn reset_allows_reuse_after_finalize() {
        let mut h = Hasher::new();
        h.update(b"first");
        let first = h.finalize();

        h.reset();
        h.update(b"first");
        let second = h.finalize();

        assert_eq!(first, second);
    }

    #[test]
    fn output_is_forty_bytes_for_every_input() {
        for size in [0usize, 1, 3, 127, 128, 1000] {
            let mut h = Hasher::new();
            h.update(&vec![(size % 256) as u8; size]);
            assert_eq!(h.finalize().len(), HASH_SIZE);
        }
    }

    #[test]
    fn distinct_inputs_produce_distinct_digests() {
        let mut h1 = Hasher::new();
        h1.update(b"a");
        let d1 = h1.finalize();

        let mut h2 = Hasher::new();
        h2.update(b"b");
        let d2 = h2.finalize();

        assert_ne!(d1, d2);
    }

    #[test]
    fn exactly_one_block_flushes_before_padding() {
        // KAT-5: a 128-byte input fills the buffer exactly; finalize must
        // still pad and absorb a second, all-padding block rather than
        // skipping padding because the buffer was flushed.
        let mut h = Hasher::new();
        h.update(&[0u8; BLOCK_SIZE]);
        assert_eq!(h.buffer_len, 0);
        let digest = h.finalize();
        assert_eq!(digest.len(), HASH_SIZE);
    }
}
