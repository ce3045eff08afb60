//! Outcome of a single `resolve` call.

/// Result of resolving one node in one pass.
///
/// Hard failures are not a variant: they are reported to the diagnostic
/// queue, and the failing node returns `Ok` so the pass keeps moving.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "a Pending response must be propagated to the caller"]
pub enum Response {
    /// Resolution of this node is complete and stable.
    Ok,
    /// Something this node depends on is not ready; retry next pass.
    Pending,
}

impl Response {
    #[inline]
    pub fn is_ok(self) -> bool {
        matches!(self, Response::Ok)
    }

    #[inline]
    pub fn is_pending(self) -> bool {
        matches!(self, Response::Pending)
    }

    /// `Ok` only if both are `Ok`.
    #[inline]
    pub fn and(self, other: Response) -> Response {
        if self.is_ok() {
            other
        } else {
            self
        }
    }
}
