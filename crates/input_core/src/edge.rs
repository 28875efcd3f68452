//! One-frame change edge detector.
//!
//! A commit arms the detector. The next [`UpdateEdge::tick`] (issued at the
//! start of the following frame) moves it to `Settling`, which is the
//! falling edge; one more tick returns it to `Idle`.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateEdge {
    #[default]
    Idle,
    /// The value changed during the current frame.
    JustChanged,
    /// The frame right after a change; `just_updated` has fallen.
    Settling,
}

impl UpdateEdge {
    /// Record a value change in the current frame.
    #[inline]
    pub fn arm(&mut self) {
        *self = UpdateEdge::JustChanged;
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        *self = match *self {
            UpdateEdge::JustChanged => UpdateEdge::Settling,
            UpdateEdge::Settling | UpdateEdge::Idle => UpdateEdge::Idle,
        };
    }

    #[inline]
    pub fn just_updated(self) -> bool {
        self == UpdateEdge::JustChanged
    }

    /// True on the single frame where `just_updated` fell.
    #[inline]
    pub fn just_settled(self) -> bool {
        self == UpdateEdge::Settling
    }
}
