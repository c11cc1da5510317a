//! Runtime variant selection for the LITTLE-box engine.
//!
//! The reference algorithm's source dispatches through a function-pointer
//! table keyed on a runtime SIMD tag (AVX-512 / AES-NI / portable). Hardware
//! backends are out of scope here (see [`crate::little_box`]'s module docs),
//! but the *pattern* survives as an enum tag plus a pure dispatch function so
//! property 7 (SIMD equivalence) has something concrete to exercise, and so a
//! future hardware backend has a seam to plug into without changing the
//! public API.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::little_box;

/// A LITTLE-box implementation selectable at runtime.
///
/// Only `Reference` is implemented: the scalar semantics fixed by the
/// algorithm definition. Any future SIMD backend must be observably
/// equivalent to it for every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LittleBoxVariant {
    /// The scalar reference implementation.
    Reference = 0,
}

impl LittleBoxVariant {
    const fn from_tag(_tag: u8) -> Self {
        Self::Reference
    }
}

static SELECTED: AtomicU8 = AtomicU8::new(LittleBoxVariant::Reference as u8);

/// The process-wide default variant, as last set by [`set_variant`].
#[must_use]
pub fn current_variant() -> LittleBoxVariant {
    LittleBoxVariant::from_tag(SELECTED.load(Ordering::Relaxed))
}

/// Override the process-wide default variant. Exists so tests (and, in
/// principle, a future hardware backend) can force a specific
/// implementation rather than relying on whatever `current_variant` last
/// resolved to.
pub fn set_variant(variant: LittleBoxVariant) {
    SELECTED.store(variant as u8, Ordering::Relaxed);
}

/// Run `variant`'s LITTLE-box implementation over `bundles`.
///
/// This is the single seam every caller in this crate goes through instead
/// of calling [`crate::little_box::execute`] directly, so swapping in a
/// hardware backend later is a one-place change.
pub fn execute(variant: LittleBoxVariant, bundles: &mut [[u64; 10]], salt: u64, round_base: u64) {
    match variant {
        LittleBoxVariant::Reference => little_box::execute(bundles, salt, round_base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_is_reference() {
        assert_eq!(current_variant(), LittleBoxVariant::Reference);
    }

    #[test]
    fn set_variant_round_trips() {
        set_variant(LittleBoxVariant::Reference);
        assert_eq!(current_variant(), LittleBoxVariant::Reference);
    }

    #[test]
    fn execute_matches_direct_call() {
        let mut via_dispatch = [[1u64; 10]];
        let mut direct = [[1u64; 10]];
        execute(LittleBoxVariant::Reference, &mut via_dispatch, 7, 0);
        little_box::execute(&mut direct, 7, 0);
        assert_eq!(via_dispatch, direct);
    }
}
