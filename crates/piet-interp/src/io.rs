//! Byte input with one-byte lookahead.
//!
//! `in(number)` needs to stop after a maximal digit run without consuming
//! the byte that follows it, so the input side of the interpreter is
//! wrapped in a peekable byte reader.

use piet_types::PietError;
use std::io::Read;

/// An injectable byte input source.
pub struct ByteInput {
    inner: Box<dyn Read>,
    peeked: Option<u8>,
}

impl ByteInput {
    pub fn new(inner: impl Read + 'static) -> Self {
        Self {
            inner: Box::new(inner),
            peeked: None,
        }
    }

    /// Look at the next byte without consuming it. `None` at end of stream.
    pub fn peek(&mut self) -> Result<Option<u8>, PietError> {
        if self.peeked.is_none() {
            let mut buf = [0u8; 1];
            self.peeked = match self.inner.read(&mut buf)? {
                0 => None,
                _ => Some(buf[0]),
            };
        }
        Ok(self.peeked)
    }

    /// Consume and return the next byte. `None` at end of stream.
    pub fn next_byte(&mut self) -> Result<Option<u8>, PietError> {
        let byte = self.peek()?;
        self.peeked = None;
        Ok(byte)
    }

    /// Consume a maximal run of ASCII decimal digits. The run may be
    /// empty; the first non-digit byte is left in the stream.
    pub fn read_digit_run(&mut self) -> Result<String, PietError> {
        let mut digits = String::new();
        while let Some(byte) = self.peek()? {
            if !byte.is_ascii_digit() {
                break;
            }
            digits.push(byte as char);
            self.peeked = None;
        }
        Ok(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn digit_run_stops_before_first_non_digit() {
        let mut input = ByteInput::new(Cursor::new(b"42abc".to_vec()));
        assert_eq!(input.read_digit_run().unwrap(), "42");
        assert_eq!(input.next_byte().unwrap(), Some(b'a'));
    }

    #[test]
    fn digit_run_is_empty_on_non_digit() {
        let mut input = ByteInput::new(Cursor::new(b"x1".to_vec()));
        assert_eq!(input.read_digit_run().unwrap(), "");
        assert_eq!(input.next_byte().unwrap(), Some(b'x'));
    }

    #[test]
    fn next_byte_signals_end_of_stream() {
        let mut input = ByteInput::new(Cursor::new(Vec::new()));
        assert_eq!(input.next_byte().unwrap(), None);
    }
}
