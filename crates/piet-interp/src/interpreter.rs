//! The interpreter loop: drives the navigator until halt, dispatching
//! decoded commands against the stack.

use crate::dispatch::Command;
use crate::grid::Grid;
use crate::io::ByteInput;
use crate::navigator::{Advance, Navigator};
use crate::stack::Stack;
use crate::trace::{NoopTracer, TraceEvent, Tracer};
use piet_types::{Codel, Result};
use std::io::{Read, Write};

/// A Piet program ready to run.
///
/// Owns the grid, the navigator state, the stack, and the injected byte
/// streams. Defaults: stdin, stdout, and a discarding tracer.
pub struct Interpreter {
    grid: Grid,
    navigator: Navigator,
    stack: Stack,
    input: ByteInput,
    output: Box<dyn Write>,
    tracer: Box<dyn Tracer>,
}

impl Interpreter {
    /// An interpreter positioned at the grid's minimum corner, DP East,
    /// CC Left, with an empty stack.
    pub fn new(grid: Grid) -> Self {
        let navigator = Navigator::new(grid.origin());
        Self {
            grid,
            navigator,
            stack: Stack::new(),
            input: ByteInput::new(std::io::stdin()),
            output: Box::new(std::io::stdout()),
            tracer: Box::new(NoopTracer),
        }
    }

    /// Replace the byte input source (default: stdin).
    pub fn with_input(mut self, input: impl Read + 'static) -> Self {
        self.input = ByteInput::new(input);
        self
    }

    /// Replace the byte output sink (default: stdout).
    pub fn with_output(mut self, output: impl Write + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    /// Replace the trace sink (default: discard).
    pub fn with_tracer(mut self, tracer: impl Tracer + 'static) -> Self {
        self.tracer = Box::new(tracer);
        self
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Run until the program halts. Output already written stays written
    /// even when an error aborts the run.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? {}
        self.output.flush()?;
        Ok(())
    }

    /// Execute one step. Returns `false` once the program has halted.
    pub fn step(&mut self) -> Result<bool> {
        match self.navigator.advance(&self.grid, self.tracer.as_mut())? {
            Advance::Halted => Ok(false),
            Advance::Moved {
                departed,
                entered,
                block_size,
                ..
            } => {
                // Transitions through white are pure motion; black never
                // appears on either side of a successful move's dispatch.
                debug_assert_ne!(entered, Codel::Black);
                if let Some(command) = Command::decode(departed, entered) {
                    self.execute(command, block_size)?;
                    self.tracer.record(&TraceEvent::Command {
                        name: command.name(),
                        block_size,
                        stack_depth: self.stack.depth(),
                    });
                }
                Ok(true)
            }
        }
    }

    fn execute(&mut self, command: Command, block_size: usize) -> Result<()> {
        match command {
            Command::Push => self.stack.push(block_size as i64),
            Command::Pop => {
                self.stack.pop();
            }
            Command::Add => self.stack.add(),
            Command::Subtract => self.stack.subtract(),
            Command::Multiply => self.stack.multiply(),
            Command::Divide => self.stack.divide(),
            Command::Mod => self.stack.modulo(),
            Command::Not => self.stack.not(),
            Command::Greater => self.stack.greater(),
            Command::Duplicate => self.stack.duplicate(),
            Command::Roll => self.stack.roll()?,
            Command::Pointer => {
                if self.stack.depth() > 0 {
                    let count = self.stack.pop();
                    self.navigator.rotate_pointer(count)?;
                }
            }
            Command::Switch => {
                if self.stack.depth() > 0 {
                    let count = self.stack.pop();
                    self.navigator.switch_chooser(count);
                }
            }
            Command::InNumber => self.stack.in_number(&mut self.input)?,
            Command::InChar => self.stack.in_char(&mut self.input)?,
            Command::OutNumber => self.stack.out_number(self.output.as_mut())?,
            Command::OutChar => self.stack.out_char(self.output.as_mut())?,
        }
        Ok(())
    }
}

impl std::fmt::Display for Interpreter {
    /// Render the navigator state, e.g. `dp:☞, cc:<, pos:(0,0)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "dp:{}, cc:{}, pos:{}",
            self.navigator.dp(),
            self.navigator.cc(),
            self.navigator.pos()
        )
    }
}
