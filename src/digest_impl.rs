//! Optional `digest`-ecosystem trait impls for [`Hasher`], matching the
//! RustCrypto `digest` crate family. No key, IV, or MAC support is offered —
//! the algorithm takes none (see the crate-level non-goals) — so only the
//! plain hashing traits are implemented.

use digest::typenum::U40;
use digest::{FixedOutput, HashMarker, Output, OutputSizeUser, Reset, Update};

use crate::hasher::Hasher;

impl OutputSizeUser for Hasher {
    type OutputSize = U40;
}

impl Update for Hasher {
    fn update(&mut self, data: &[u8]) {
        Self::update(self, data);
    }
}

impl FixedOutput for Hasher {
    fn finalize_into(mut self, out: &mut Output<Self>) {
        let digest = self.finalize();
        out.copy_from_slice(&digest);
    }
}

impl Reset for Hasher {
    fn reset(&mut self) {
        Self::reset(self);
    }
}

impl HashMarker for Hasher {}

#[cfg(test)]
mod tests {
    use super::*;
    use digest::Digest;

    fn hash_generic<D: Digest>(input: &[u8]) -> Vec<u8> {
        let mut h = D::new();
        digest::Digest::update(&mut h, input);
        h.finalize().to_vec()
    }

    #[test]
    fn digest_trait_matches_native_api() {
        let native = crate::oneshot::hash(b"digest trait parity");
        let generic = hash_generic::<Hasher>(b"digest trait parity");
        assert_eq!(native.as_slice(), generic.as_slice());
    }

    #[test]
    fn output_size_is_forty_bytes() {
        use digest::typenum::Unsigned;
        assert_eq!(<Hasher as OutputSizeUser>::OutputSize::to_usize(), 40);
    }
}
