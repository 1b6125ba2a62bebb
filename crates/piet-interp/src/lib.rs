//! Piet execution engine.
//!
//! Executes a program given as an immutable 2D color grid:
//! - [`Grid`] — the decoded pixel grid (built by an external image decoder)
//! - [`Region`] — maximal same-colored 4-connected regions via flood fill
//! - [`Navigator`] — the DP/CC state machine: exit-codel selection, white
//!   glide, and the 8-state recovery protocol that doubles as the halting
//!   detector
//! - [`Command`] — the color-transition-to-operation decoder
//! - [`Stack`] — the integer stack machine, including character/number I/O
//!   marshaling
//! - [`Interpreter`] — drives steps until halt
//!
//! Image decoding, argument parsing, and trace rendering live in the CLI
//! crate; this crate only consumes a [`Grid`] and injected byte streams.

mod dispatch;
mod grid;
mod interpreter;
mod io;
mod navigator;
mod region;
mod stack;
mod trace;

pub use dispatch::Command;
pub use grid::Grid;
pub use interpreter::Interpreter;
pub use io::ByteInput;
pub use navigator::{Advance, Navigator};
pub use region::{locate, Region, RegionLocator};
pub use stack::Stack;
pub use trace::{NoopTracer, TraceEvent, Tracer};
