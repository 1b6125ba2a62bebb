//! Interpreter error types.

use crate::color::Rgb;
use thiserror::Error;

/// Errors that can abort a Piet program.
///
/// Note what is *not* here: a blocked move is not an error (the navigator
/// recovers or halts), and a stack operation with too few operands is a
/// silent no-op, matching the language's permissive stack semantics.
#[derive(Debug, Error)]
pub enum PietError {
    /// A pixel's color is outside the canonical 20-color palette.
    #[error("unrecognized color {0}")]
    UnrecognizedColor(Rgb),

    /// `in(char)` was executed after the input stream ended.
    #[error("input exhausted")]
    InputExhausted,

    /// An operation the interpreter does not implement (e.g. negative
    /// roll counts).
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// The grid could not be constructed from the decoded image data.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// An I/O failure on the injected input/output streams.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
