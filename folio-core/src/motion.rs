//! Reduced-motion preference.

pub use crate::constants::REDUCED_MOTION_QUERY;

/// Whether the visitor accepts animated transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    /// Map the result of matching [`REDUCED_MOTION_QUERY`].
    #[must_use]
    pub const fn from_media_match(matches: bool) -> Self {
        if matches { Self::Reduced } else { Self::Full }
    }

    #[must_use]
    pub const fn is_reduced(self) -> bool {
        matches!(self, Self::Reduced)
    }

    /// Transition delay to force on animatable elements, if any.
    ///
    /// Reduced motion pins every delay to zero so revealed content appears at once.
    #[must_use]
    pub const fn forced_delay(self) -> Option<&'static str> {
        match self {
            Self::Reduced => Some("0s"),
            Self::Full => None,
        }
    }
}
