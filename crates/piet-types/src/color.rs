//! The Piet color model.
//!
//! Exactly 20 colors are meaningful: black (wall), white (glide path), and
//! an 18-entry table of 6 hues × 3 lightness levels. Classification is by
//! exact RGB equality; any other value is an `UnrecognizedColor` error,
//! never silently bucketed, since the hue/lightness deltas between
//! consecutive regions drive every operation.

use crate::error::PietError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An exact 8-bit-per-channel color value as decoded from the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The exact color for a hue/lightness pair, from the canonical table.
    pub const fn of(hue: Hue, lightness: Lightness) -> Self {
        PALETTE[lightness as usize][hue as usize]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Hue column of the color table. The cyclic order is the order operations
/// are derived from, so the discriminants are load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    Red = 0,
    Yellow = 1,
    Green = 2,
    Cyan = 3,
    Blue = 4,
    Magenta = 5,
}

impl Hue {
    /// Clockwise cyclic distance from `self` to `other`, in [0, 6).
    pub fn steps_to(self, other: Hue) -> u8 {
        (other as u8 + 6 - self as u8) % 6
    }
}

/// Lightness row of the color table. Cyclic, like hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lightness {
    Light = 0,
    Normal = 1,
    Dark = 2,
}

impl Lightness {
    /// Cyclic distance from `self` to `other`, darkening direction, in [0, 3).
    pub fn steps_to(self, other: Lightness) -> u8 {
        (other as u8 + 3 - self as u8) % 3
    }
}

/// The 6×3 canonical color table, indexed `[lightness][hue]`.
const PALETTE: [[Rgb; 6]; 3] = [
    // light
    [
        Rgb::new(0xFF, 0xC0, 0xC0),
        Rgb::new(0xFF, 0xFF, 0xC0),
        Rgb::new(0xC0, 0xFF, 0xC0),
        Rgb::new(0xC0, 0xFF, 0xFF),
        Rgb::new(0xC0, 0xC0, 0xFF),
        Rgb::new(0xFF, 0xC0, 0xFF),
    ],
    // normal
    [
        Rgb::new(0xFF, 0x00, 0x00),
        Rgb::new(0xFF, 0xFF, 0x00),
        Rgb::new(0x00, 0xFF, 0x00),
        Rgb::new(0x00, 0xFF, 0xFF),
        Rgb::new(0x00, 0x00, 0xFF),
        Rgb::new(0xFF, 0x00, 0xFF),
    ],
    // dark
    [
        Rgb::new(0xC0, 0x00, 0x00),
        Rgb::new(0xC0, 0xC0, 0x00),
        Rgb::new(0x00, 0xC0, 0x00),
        Rgb::new(0x00, 0xC0, 0xC0),
        Rgb::new(0x00, 0x00, 0xC0),
        Rgb::new(0xC0, 0x00, 0xC0),
    ],
];

const HUES: [Hue; 6] = [
    Hue::Red,
    Hue::Yellow,
    Hue::Green,
    Hue::Cyan,
    Hue::Blue,
    Hue::Magenta,
];

const LIGHTNESSES: [Lightness; 3] = [Lightness::Light, Lightness::Normal, Lightness::Dark];

/// The semantic category of a codel's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Codel {
    /// Wall — movement into black fails.
    Black,
    /// Glide path — movement slides through white without executing.
    White,
    /// One of the 18 colored codel types.
    Colored { hue: Hue, lightness: Lightness },
}

impl Codel {
    /// Classify an exact color value.
    ///
    /// Colors outside the canonical 20 are an error: continuing past one
    /// would execute undefined semantics.
    pub fn classify(color: Rgb) -> Result<Codel, PietError> {
        if color == Rgb::BLACK {
            return Ok(Codel::Black);
        }
        if color == Rgb::WHITE {
            return Ok(Codel::White);
        }
        for lightness in LIGHTNESSES {
            for hue in HUES {
                if color == Rgb::of(hue, lightness) {
                    return Ok(Codel::Colored { hue, lightness });
                }
            }
        }
        Err(PietError::UnrecognizedColor(color))
    }
}
