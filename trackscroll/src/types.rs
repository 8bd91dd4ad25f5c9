use alloc::boxed::Box;

/// The capability every virtualized list item must provide.
///
/// A track represents one row or column of the list. The engine never owns
/// the caller's items; it snapshots the two strings below once per list
/// generation.
///
/// Consumers that need to distinguish item kinds (headings vs. image rows,
/// say) should implement this on an enum and pattern-match on the variants
/// rather than building a type hierarchy.
pub trait Track {
    /// A stable identity, unique within one list snapshot.
    ///
    /// Used to keep the viewport anchored to the same item across
    /// [`crate::ScrollEngine::update_tracks`] calls.
    fn track_id(&self) -> &str;

    /// Groups tracks that render at an identical measured size.
    ///
    /// All tracks sharing a size class are assumed to have the size last
    /// measured for any one of them.
    fn size_class(&self) -> &str;
}

impl<T: Track + ?Sized> Track for &T {
    fn track_id(&self) -> &str {
        (**self).track_id()
    }

    fn size_class(&self) -> &str {
        (**self).size_class()
    }
}

impl<T: Track + ?Sized> Track for Box<T> {
    fn track_id(&self) -> &str {
        (**self).track_id()
    }

    fn size_class(&self) -> &str {
        (**self).size_class()
    }
}

/// How a programmatic scroll should be performed by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Jump to the target offset immediately.
    Instant,
    /// Animate towards the target offset.
    Smooth,
}
