//! Line cursor over an in-memory report buffer.
//!
//! The cursor yields newline-terminated physical lines as spans of the
//! buffer. A carriage return directly before the newline is dropped, so a
//! CR/LF blank line is zero-length just like an LF one. Bytes after the last
//! newline are not a line: the scan ends there.

use log::trace;

use crate::field::{self, Column};

/// One physical line of a report, without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number within the buffer.
    pub number: usize,
    /// Byte offset of the first byte of the line.
    pub start: usize,
    pub bytes: &'a [u8],
}

impl<'a> Line<'a> {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// A zero-length line marks a page boundary in most reports.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn first(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    pub fn last(&self) -> Option<u8> {
        self.bytes.last().copied()
    }

    pub fn char_at(&self, offset: usize) -> char {
        field::char_at(self.bytes, offset)
    }

    pub fn field(&self, column: &Column) -> String {
        column.extract(self.bytes)
    }

    /// A numeric column read with `atoi` rules. Text that does not start
    /// with a number reads as 0.
    pub fn integer(&self, column: &Column) -> i32 {
        let text = self.field(column);
        let unsigned = text.strip_prefix(['-', '+']).unwrap_or(&text);
        if !text.is_empty() && !unsigned.starts_with(|c: char| c.is_ascii_digit()) {
            trace!(
                "line {}: {} is not a number: {:?}",
                self.number, column.name, text
            );
        }
        field::parse_int(&text)
    }

    /// Lossy text of the whole line, for logging and substring tests.
    pub fn text(&self) -> std::borrow::Cow<'a, str> {
        String::from_utf8_lossy(self.bytes)
    }
}

/// Forward-only iterator over the lines of one buffer.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    buffer: &'a [u8],
    pos: usize,
    number: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            pos: 0,
            number: 0,
        }
    }

    /// Consume up to `n` lines, returning how many were actually there.
    pub fn skip_lines(&mut self, n: usize) -> usize {
        self.by_ref().take(n).count()
    }

    /// Bytes not yet consumed as lines.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buffer[self.pos..]
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.buffer[self.pos..];
        let end = rest.iter().position(|&b| b == b'\n')?;
        let mut bytes = &rest[..end];
        if let Some((&b'\r', head)) = bytes.split_last() {
            bytes = head;
        }
        let line = Line {
            number: self.number + 1,
            start: self.pos,
            bytes,
        };
        self.pos += end + 1;
        self.number += 1;
        Some(line)
    }
}
