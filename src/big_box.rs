//! BIG-box execution: drives 10 LITTLE boxes per BIG box and folds their
//! state into one row of the BIG-box output.

use crate::constants::{LITTLE_BOX_COUNT, RC, STATE_WORDS};
use crate::engine;
use crate::mixers::gamma_mix;
use crate::salt::generate_salt;

/// `big_box_execute(h, box_index, round_base) -> big_box_state[box_index]`.
///
/// The source recomputes `salt_variation` a second time after the
/// per-`lb` LITTLE-box call; that recomputed value escapes the loop
/// unused. This is dead code in the reference and is omitted here.
#[must_use]
pub fn big_box_execute(h: &[u64; STATE_WORDS], box_index: usize, round_base: u64) -> [u64; STATE_WORDS] {
    let salt = generate_salt(h);
    let mut little_box_state = [[0u64; 10]; LITTLE_BOX_COUNT];

    for lb in 0..LITTLE_BOX_COUNT {
        let mut little_input = [0u64; 10];
        for i in 0..STATE_WORDS {
            little_input[i] = h[i] ^ salt[i];
            little_input[i + 5] = h[i] ^ RC[((lb * 10 + i) & 127)];
        }
        let salt_variation = salt[lb % STATE_WORDS] ^ RC[(lb * 10) & 127];

        let mut bundles = [little_input];
        engine::execute(
            engine::current_variant(),
            &mut bundles,
            salt_variation,
            round_base + (lb as u64) * 10,
        );

        little_box_state[lb] = bundles[0];
    }

    let mut row = [0u64; STATE_WORDS];
    for i in 0..STATE_WORDS {
        let mut acc: u64 = 0;
        for lb_state in &little_box_state {
            acc ^= lb_state[2 * i];
            acc = acc.wrapping_add(lb_state[2 * i + 1]);
        }
        row[i] = gamma_mix(
            acc,
            salt[i],
            RC[(box_index * 100 + i) & 127],
            round_base + 1000,
        );
    }
    row
}
