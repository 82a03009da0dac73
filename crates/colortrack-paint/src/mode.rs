//! Display mode selection
//!
//! An explicit value naming which view a front end should present.
//! The render step receives it as a parameter; nothing in the
//! workspace keeps it as shared mutable state.

/// Which view to present for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// The live frame, unmodified
    #[default]
    Live,
    /// The frame with discovered regions flattened to flat colors
    Recolored,
    /// The accumulated painting canvas
    Painting,
}

impl DisplayMode {
    /// Map the conventional key bindings to a mode:
    /// `'w'` live, `'r'` recolored, `'p'` painting.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Self::Live),
            'r' => Some(Self::Recolored),
            'p' => Some(Self::Painting),
            _ => None,
        }
    }

    /// The key bound to this mode.
    pub fn key(self) -> char {
        match self {
            Self::Live => 'w',
            Self::Recolored => 'r',
            Self::Painting => 'p',
        }
    }
}
