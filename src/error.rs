//! Misuse detection. The core algorithm is total (§7): the only
//! user-visible error is driving a context out of its `init → updates →
//! finalize` lifecycle.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

/// Reports that `update` or `finalize` was called on a context that has
/// already been finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasherMisuseError {
    operation: &'static str,
}

impl HasherMisuseError {
    pub(crate) const fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

impl fmt::Display for HasherMisuseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "XzalgoChain: `{}` called on a context that was already finalized; call `reset` first",
            self.operation
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for HasherMisuseError {}
