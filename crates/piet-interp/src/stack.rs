//! The Piet stack machine.
//!
//! A LIFO of signed 64-bit integers. Operations whose operand requirements
//! are not met are silent no-ops — the language replaces undefined stack
//! behavior with "do nothing", not with errors. The two deliberate
//! exceptions: `in(char)` on an exhausted stream is a hard error, and
//! negative `roll` counts are an unsupported-operation error.

use crate::io::ByteInput;
use piet_types::PietError;
use std::io::Write;

/// The interpreter's integer stack, top = most recently pushed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stack {
    data: Vec<i64>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.data.len()
    }

    pub fn push(&mut self, n: i64) {
        self.data.push(n);
    }

    /// Pop the top value; 0 if the stack is empty.
    pub fn pop(&mut self) -> i64 {
        self.data.pop().unwrap_or(0)
    }

    pub fn add(&mut self) {
        if self.data.len() >= 2 {
            let top = self.pop();
            let second = self.pop();
            self.push(second.wrapping_add(top));
        }
    }

    pub fn subtract(&mut self) {
        if self.data.len() >= 2 {
            let top = self.pop();
            let second = self.pop();
            self.push(second.wrapping_sub(top));
        }
    }

    pub fn multiply(&mut self) {
        if self.data.len() >= 2 {
            let top = self.pop();
            let second = self.pop();
            self.push(second.wrapping_mul(top));
        }
    }

    /// Integer division, truncating toward zero. A zero divisor restores
    /// both operands and does nothing.
    pub fn divide(&mut self) {
        if self.data.len() >= 2 {
            let top = self.pop();
            let second = self.pop();
            if top == 0 {
                // Put them back so this becomes a no-op.
                self.push(second);
                self.push(top);
            } else {
                self.push(second.wrapping_div(top));
            }
        }
    }

    /// Floored modulo: the result takes the divisor's sign. Same zero-
    /// divisor policy as `divide`.
    pub fn modulo(&mut self) {
        if self.data.len() >= 2 {
            let top = self.pop();
            let second = self.pop();
            if top == 0 {
                self.push(second);
                self.push(top);
            } else {
                let mut r = second.wrapping_rem(top);
                if r != 0 && (r < 0) != (top < 0) {
                    r += top;
                }
                self.push(r);
            }
        }
    }

    pub fn not(&mut self) {
        if !self.data.is_empty() {
            let top = self.pop();
            self.push(i64::from(top == 0));
        }
    }

    pub fn greater(&mut self) {
        if self.data.len() >= 2 {
            let top = self.pop();
            let second = self.pop();
            self.push(i64::from(second > top));
        }
    }

    pub fn duplicate(&mut self) {
        if let Some(&top) = self.data.last() {
            self.push(top);
        }
    }

    /// Pop a roll count and a depth, then cyclically rotate the top
    /// `depth` values `count` single-step rolls (one roll buries the top
    /// value `depth` positions down).
    ///
    /// An out-of-range depth restores both operands and does nothing; a
    /// negative count is unsupported.
    pub fn roll(&mut self) -> Result<(), PietError> {
        if self.data.len() < 2 {
            return Ok(());
        }
        let count = self.pop();
        let depth = self.pop();
        if count < 0 {
            self.push(depth);
            self.push(count);
            return Err(PietError::Unsupported(format!(
                "roll with negative count {count}"
            )));
        }
        if depth < 0 || depth as usize > self.data.len() {
            self.push(depth);
            self.push(count);
            return Ok(());
        }
        let depth = depth as usize;
        if depth > 0 {
            let shift = (count % depth as i64) as usize;
            let start = self.data.len() - depth;
            self.data[start..].rotate_right(shift);
        }
        Ok(())
    }

    /// Read a maximal digit run from the input and push its value. An
    /// empty run (exhausted stream or non-digit next byte) is a no-op.
    pub fn in_number(&mut self, input: &mut ByteInput) -> Result<(), PietError> {
        let digits = input.read_digit_run()?;
        if let Ok(n) = digits.parse::<i64>() {
            self.push(n);
        }
        Ok(())
    }

    /// Read one byte from the input and push its code. Unlike
    /// `in_number`, an exhausted stream is a hard error.
    pub fn in_char(&mut self, input: &mut ByteInput) -> Result<(), PietError> {
        match input.next_byte()? {
            Some(byte) => {
                self.push(i64::from(byte));
                Ok(())
            }
            None => Err(PietError::InputExhausted),
        }
    }

    /// Pop a value and write its decimal representation.
    pub fn out_number(&mut self, output: &mut dyn Write) -> Result<(), PietError> {
        if !self.data.is_empty() {
            let top = self.pop();
            write!(output, "{top}")?;
        }
        Ok(())
    }

    /// Pop a value and write the byte `value mod 256`.
    pub fn out_char(&mut self, output: &mut dyn Write) -> Result<(), PietError> {
        if !self.data.is_empty() {
            let top = self.pop();
            output.write_all(&[top.rem_euclid(256) as u8])?;
        }
        Ok(())
    }
}
