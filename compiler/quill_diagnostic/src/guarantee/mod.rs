//! Proof that an error was reported.

use std::fmt;

/// Zero-sized token only obtainable by emitting an error.
///
/// The private field keeps it from being constructed outside this crate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// A guarantee for an error count that is known to be nonzero.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then(Self::new)
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error(s) emitted")
    }
}
