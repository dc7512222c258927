use crate::error::*;
use std::io;
use std::io::BufRead;
use std::str;
use trine_api::parser::LineColumn;

/// Reads the input code point by code point in a streaming way.
///
/// `\r\n` is folded into a single `\n`, a bare `\r` is kept as is.
/// Lines are counted by the caller, the reader only tracks the column.
pub struct CodepointReader<R: BufRead> {
    inner: R,
    /// Code point given back with `pushback`.
    pushed: Option<char>,
    /// Code point decoded while looking past a `\r`.
    lookahead: Option<char>,
    last: Option<char>,
    line: u64,
    /// Number of code points returned on the current line, end of input included.
    consumed: u64,
}

impl<R: BufRead> CodepointReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushed: None,
            lookahead: None,
            last: None,
            line: 0,
            consumed: 0,
        }
    }

    /// Returns the next code point or `None` at the end of the input.
    pub fn next(&mut self) -> Result<Option<char>, NTriplesError> {
        let c = match self.pushed.take() {
            Some(c) => Some(c),
            None => match self.decode(0)? {
                Some('\r') => match self.decode(1)? {
                    Some('\n') => Some('\n'),
                    other => {
                        self.lookahead = other;
                        Some('\r')
                    }
                },
                other => other,
            },
        };
        self.last = c;
        self.consumed += 1;
        Ok(c)
    }

    /// Gives back the last code point returned by `next`.
    ///
    /// Only one code point can be pushed back between two calls to `next`.
    pub fn pushback(&mut self) {
        debug_assert!(self.pushed.is_none(), "only one code point can be pushed back");
        self.pushed = self.last.take();
        self.consumed = self.consumed.saturating_sub(1);
    }

    /// Moves to a new line: sets the line number and resets the column.
    pub fn start_line(&mut self, line: u64) {
        self.line = line;
        self.consumed = 0;
    }

    /// The index in the line of the last code point returned by `next`.
    pub fn column(&self) -> u64 {
        self.consumed.saturating_sub(1)
    }

    pub fn position(&self) -> LineColumn {
        LineColumn::new(self.line, self.column())
    }

    pub fn parse_error(&self, kind: NTriplesErrorKind) -> NTriplesError {
        NTriplesError {
            kind,
            position: Some(self.position()),
        }
    }

    /// Builds the error for the code point last returned by `next`.
    pub fn unexpected(&self, c: Option<char>) -> NTriplesError {
        self.parse_error(match c {
            Some(c) => NTriplesErrorKind::UnexpectedCharacter(c),
            None => NTriplesErrorKind::UnexpectedEndOfInput,
        })
    }

    /// Decodes one code point. `offset` is its distance to the next column.
    fn decode(&mut self, offset: u64) -> Result<Option<char>, NTriplesError> {
        if let Some(c) = self.lookahead.take() {
            return Ok(Some(c));
        }
        let first = match self.read_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };
        let width = match first {
            0x00..=0x7F => return Ok(Some(char::from(first))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(self.invalid_utf8(offset)),
        };
        let mut bytes = [first, 0, 0, 0];
        for byte in bytes.iter_mut().take(width).skip(1) {
            match self.read_byte()? {
                Some(b) if b & 0xC0 == 0x80 => *byte = b,
                _ => return Err(self.invalid_utf8(offset)),
            }
        }
        match str::from_utf8(&bytes[..width]) {
            Ok(s) => Ok(s.chars().next()),
            Err(_) => Err(self.invalid_utf8(offset)),
        }
    }

    fn invalid_utf8(&self, offset: u64) -> NTriplesError {
        NTriplesError {
            kind: NTriplesErrorKind::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            )),
            position: Some(LineColumn::new(self.line, self.consumed + offset)),
        }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let buffer = match self.inner.fill_buf() {
                Ok(buffer) => buffer,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            let byte = match buffer.first() {
                Some(b) => *b,
                None => return Ok(None),
            };
            self.inner.consume(1);
            return Ok(Some(byte));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(data: &str) -> Vec<char> {
        let mut read = CodepointReader::new(data.as_bytes());
        let mut chars = Vec::new();
        while let Some(c) = read.next().unwrap() {
            chars.push(c);
        }
        chars
    }

    #[test]
    fn folds_crlf() {
        assert_eq!(vec!['a', '\n', 'b'], read_all("a\r\nb"));
        assert_eq!(vec!['a', '\r', 'b'], read_all("a\rb"));
        assert_eq!(vec!['a', '\r'], read_all("a\r"));
        assert_eq!(vec!['\r', '\n'], read_all("\r\r\n"));
    }

    #[test]
    fn decodes_utf8() {
        assert_eq!(vec!['é', '€', '𝄞'], read_all("é€𝄞"));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let mut read = CodepointReader::new(&b"a\xFFb"[..]);
        read.start_line(1);
        assert_eq!(Some('a'), read.next().unwrap());
        let error = read.next().unwrap_err();
        assert!(matches!(error.kind(), NTriplesErrorKind::Io(_)));
        assert_eq!(Some(1), error.column());

        let mut read = CodepointReader::new(&b"a\r\xC3"[..]);
        read.start_line(3);
        assert_eq!(Some('a'), read.next().unwrap());
        let error = read.next().unwrap_err();
        assert_eq!(Some(3), error.line());
        assert_eq!(Some(2), error.column());
    }

    #[test]
    fn columns_follow_pushback() {
        let mut read = CodepointReader::new("ab\r\nc".as_bytes());
        read.start_line(1);
        assert_eq!(Some('a'), read.next().unwrap());
        assert_eq!(0, read.column());
        assert_eq!(Some('b'), read.next().unwrap());
        assert_eq!(1, read.column());
        read.pushback();
        assert_eq!(0, read.column());
        assert_eq!(Some('b'), read.next().unwrap());
        assert_eq!(Some('\n'), read.next().unwrap());
        assert_eq!(2, read.column());
        read.start_line(2);
        assert_eq!(Some('c'), read.next().unwrap());
        assert_eq!(LineColumn::new(2, 0), read.position());
        assert_eq!(None, read.next().unwrap());
        assert_eq!(1, read.column());
    }

    #[test]
    fn pushback_after_bare_cr() {
        let mut read = CodepointReader::new("\rx".as_bytes());
        assert_eq!(Some('\r'), read.next().unwrap());
        read.pushback();
        assert_eq!(Some('\r'), read.next().unwrap());
        assert_eq!(Some('x'), read.next().unwrap());
        assert_eq!(None, read.next().unwrap());
    }
}
