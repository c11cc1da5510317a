//! Salt derivation: folds digest state into a fixed constant table to
//! produce the per-finalize salt consumed by the BIG-box/LITTLE-box network.

use crate::constants::{SALT_INIT, SALT_ROUNDS, SALT_WORDS, STATE_WORDS};
use crate::primitives::{rotl64, rotr64};

/// `generate_salt(h) -> salt[0..5]`.
#[must_use]
pub fn generate_salt(h: &[u64; STATE_WORDS]) -> [u64; STATE_WORDS] {
    let mut s = SALT_INIT;
    for i in 0..STATE_WORDS {
        s[i] ^= h[i];
    }

    let mut counter: u64 = 0;
    for round in 0..SALT_ROUNDS {
        for j in 0..SALT_WORDS {
            let rotl_amt = ((j as u32) * 7 + round * 3) % 64;
            let rotr_amt = ((j as u32) * 5 + round * 2) % 64;
            let partner = s[(j + 3) & 7];
            s[j] ^= rotl64(s[j], rotl_amt) ^ rotr64(partner, rotr_amt);
            s[j] = s[j].wrapping_add(counter);
        }
        counter = counter.wrapping_add(0x7C5F_8E4D_3B2A_6917);
    }

    let mut salt = [0u64; STATE_WORDS];
    for i in 0..STATE_WORDS {
        let mut v = s[i] ^ s[(i + 3) & 7];
        v ^= v >> 31;
        v = v.wrapping_mul(0x3A8F_7E6D_5C4B_2918);
        v ^= v >> 29;
        v = v.wrapping_mul(0x276D_9C5F_8E3B_41A2);
        salt[i] = v;
    }
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_salt_is_deterministic() {
        let h = [1u64, 2, 3, 4, 5];
        assert_eq!(generate_salt(&h), generate_salt(&h));
    }

    #[test]
    fn generate_salt_is_sensitive_to_state() {
        let h1 = [1u64, 2, 3, 4, 5];
        let h2 = [1u64, 2, 3, 4, 6];
        assert_ne!(generate_salt(&h1), generate_salt(&h2));
    }

    #[test]
    fn generate_salt_is_never_the_zero_state() {
        let salt = generate_salt(&[0u64; 5]);
        assert!(salt.iter().any(|&v| v != 0));
    }
}
