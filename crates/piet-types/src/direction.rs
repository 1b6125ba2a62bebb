//! Direction pointer and codel chooser — the two navigation enums.
//!
//! Modeled as closed enumerations with explicit rotation/toggle functions
//! rather than raw offset vectors: every DP value is one of exactly four
//! headings, and the (DP, CC) pair has exactly 8 combinations, which the
//! navigator uses as its halting-detection cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The direction pointer: the compass heading used to pick a region's
/// exit face. Rotates clockwise only, in 90° steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dp {
    East,
    South,
    West,
    North,
}

impl Dp {
    /// Rotate one step clockwise (East → South → West → North → East).
    pub fn rotate(self) -> Self {
        match self {
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
            Self::North => Self::East,
        }
    }

    /// The unit (dx, dy) offset of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
            Self::North => (0, -1),
        }
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Compass glyphs, matching the verbose trace rendering.
        let glyph = match self {
            Self::East => '\u{261E}',
            Self::South => '\u{261F}',
            Self::West => '\u{261C}',
            Self::North => '\u{261D}',
        };
        write!(f, "{glyph}")
    }
}

/// The codel chooser: the left/right tie-breaker used to pick among
/// multiple codels on the exit face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cc {
    Left,
    Right,
}

impl Cc {
    /// Flip to the other side.
    pub fn toggle(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Cc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Self::Left => '<',
            Self::Right => '>',
        };
        write!(f, "{glyph}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dp_rotation_cycles_in_four_steps() {
        let mut dp = Dp::East;
        let seen = [Dp::East, Dp::South, Dp::West, Dp::North];
        for expected in seen {
            assert_eq!(dp, expected);
            dp = dp.rotate();
        }
        assert_eq!(dp, Dp::East);
    }

    #[test]
    fn cc_toggle_is_involutive() {
        assert_eq!(Cc::Left.toggle(), Cc::Right);
        assert_eq!(Cc::Left.toggle().toggle(), Cc::Left);
    }

    #[test]
    fn dp_offsets_are_unit_steps() {
        assert_eq!(Dp::East.offset(), (1, 0));
        assert_eq!(Dp::South.offset(), (0, 1));
        assert_eq!(Dp::West.offset(), (-1, 0));
        assert_eq!(Dp::North.offset(), (0, -1));
    }
}
