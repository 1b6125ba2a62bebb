//! Shared types for the Piet interpreter.
//!
//! This crate defines the geometry primitives (`Point`, `Rect`), the
//! navigation state enums (`Dp`, `Cc`), the color classifier (`Rgb`,
//! `Codel`), and the error taxonomy used across the interpreter crates.

mod color;
mod direction;
mod error;
mod point;

pub use color::{Codel, Hue, Lightness, Rgb};
pub use direction::{Cc, Dp};
pub use error::PietError;
pub use point::{Point, Rect};

/// Result type used throughout the Piet interpreter.
pub type Result<T> = std::result::Result<T, PietError>;
