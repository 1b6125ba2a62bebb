//! Structured step-level trace events.
//!
//! The navigator and dispatcher report what they do to an injectable
//! [`Tracer`]; the default sink discards everything. Rendering (human or
//! JSON) is a collaborator's concern — events never affect execution.

use piet_types::{Cc, Dp, Point};
use serde::Serialize;
use std::fmt;

/// One observational event from the interpreter.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A successful move between regions (or into/out of white).
    Step {
        from: Point,
        to: Point,
        dp: Dp,
        cc: Cc,
    },
    /// A glide through white codels.
    Glide { from: Point, to: Point, dp: Dp },
    /// A blocked attempt entered the 8-state recovery protocol.
    RecoveryStart { pos: Point, dp: Dp, cc: Cc },
    /// Recovery finished: either a step succeeded or all 8 states failed.
    RecoveryEnd { dp: Dp, cc: Cc, halted: bool },
    /// A decoded operation was executed.
    Command {
        name: &'static str,
        block_size: usize,
        stack_depth: usize,
    },
    /// The program halted cleanly.
    Halt { pos: Point },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step { from, to, dp, cc } => {
                write!(f, "step {from} -> {to} dp:{dp} cc:{cc}")
            }
            Self::Glide { from, to, dp } => write!(f, "glide {from} -> {to} dp:{dp}"),
            Self::RecoveryStart { pos, dp, cc } => {
                write!(f, "recovery at {pos} dp:{dp} cc:{cc}")
            }
            Self::RecoveryEnd { dp, cc, halted } => {
                if *halted {
                    write!(f, "recovery exhausted, halting")
                } else {
                    write!(f, "recovered dp:{dp} cc:{cc}")
                }
            }
            Self::Command {
                name,
                block_size,
                stack_depth,
            } => write!(f, "{name} (block {block_size}, stack {stack_depth})"),
            Self::Halt { pos } => write!(f, "halt at {pos}"),
        }
    }
}

/// An injectable trace sink.
pub trait Tracer {
    fn record(&mut self, event: &TraceEvent);
}

/// The default sink: discards every event.
#[derive(Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn record(&mut self, _event: &TraceEvent) {}
}
