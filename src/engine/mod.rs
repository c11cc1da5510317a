//! Dispatch shim over LITTLE-box implementations.
//!
//! The reference algorithm's source dispatches through a function-pointer
//! table keyed on a runtime SIMD tag. This crate models that as an enum tag
//! plus a pure function, per the design notes: only the scalar reference
//! variant is implemented (hardware SIMD backends are out of scope), but the
//! selector plumbing is real and is what property 7 (SIMD equivalence)
//! exercises.

pub mod dispatcher;

pub use dispatcher::{current_variant, execute, set_variant, LittleBoxVariant};
