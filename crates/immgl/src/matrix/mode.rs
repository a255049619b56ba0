/// Selects which stack matrix operations target.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum MatrixMode {
    #[default]
    ModelView,
    Projection,
    Texture,
    Color,
}

impl MatrixMode {
    pub const ALL: [MatrixMode; 4] = [
        MatrixMode::ModelView,
        MatrixMode::Projection,
        MatrixMode::Texture,
        MatrixMode::Color,
    ];

    /// Maps a legacy enum value (`GL_MODELVIEW`, `GL_PROJECTION`, ...).
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0x1700 => Some(MatrixMode::ModelView),
            0x1701 => Some(MatrixMode::Projection),
            0x1702 => Some(MatrixMode::Texture),
            0x1800 => Some(MatrixMode::Color),
            _ => None,
        }
    }

    pub const fn to_raw(self) -> u32 {
        match self {
            MatrixMode::ModelView => 0x1700,
            MatrixMode::Projection => 0x1701,
            MatrixMode::Texture => 0x1702,
            MatrixMode::Color => 0x1800,
        }
    }

    #[inline]
    pub(super) const fn index(self) -> usize {
        match self {
            MatrixMode::ModelView => 0,
            MatrixMode::Projection => 1,
            MatrixMode::Texture => 2,
            MatrixMode::Color => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_round_trip() {
        for mode in MatrixMode::ALL {
            assert_eq!(MatrixMode::from_raw(mode.to_raw()), Some(mode));
        }
    }

    #[test]
    fn unknown_raw_value_is_none() {
        // GL_MODELVIEW_MATRIX is a query token, not a mode.
        assert_eq!(MatrixMode::from_raw(0x0BA6), None);
    }

    #[test]
    fn indices_are_distinct() {
        let mut seen = [false; 4];
        for mode in MatrixMode::ALL {
            assert!(!seen[mode.index()]);
            seen[mode.index()] = true;
        }
    }
}
