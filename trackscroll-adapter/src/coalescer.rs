/// Single-slot frame coalescer.
///
/// Hosts typically receive many scroll and mutation events between two
/// animation frames; only the most recent state matters. The coalescer
/// collapses any number of [`FrameCoalescer::request`] calls into a single
/// pending flag that [`FrameCoalescer::take`] consumes once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCoalescer {
    pending: bool,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a recompute as wanted. Idempotent until the next `take`.
    pub fn request(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consumes the pending flag, returning whether work was requested.
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.pending)
    }
}
