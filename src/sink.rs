//! Destinations for rendered lines.

use std::io::{self, Write};

/// Accepts rendered output one line at a time, in input order.
pub trait LineSink {
    /// Append one rendered record. Debug renderings may contain embedded
    /// newlines; the sink terminates the whole text once.
    fn emit(&mut self, line: &str) -> io::Result<()>;

    /// Receive the column header of a normalized stream.
    fn header(&mut self, line: &str) -> io::Result<()> {
        self.emit(line)
    }
}

impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        (**self).emit(line)
    }

    fn header(&mut self, line: &str) -> io::Result<()> {
        (**self).header(line)
    }
}

/// An absent sink discards everything.
impl<S: LineSink> LineSink for Option<S> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        match self {
            Some(sink) => sink.emit(line),
            None => Ok(()),
        }
    }

    fn header(&mut self, line: &str) -> io::Result<()> {
        match self {
            Some(sink) => sink.header(line),
            None => Ok(()),
        }
    }
}

/// Newline-terminated lines written to any `io::Write`.
#[derive(Debug)]
pub struct WriteSink<W> {
    inner: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> LineSink for WriteSink<W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{line}")
    }
}

/// Writes records to an output and echoes them to a console.
///
/// The column header goes to the output only.
#[derive(Debug)]
pub struct Tee<O, E> {
    pub output: O,
    pub echo: E,
}

impl<O: LineSink, E: LineSink> LineSink for Tee<O, E> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.output.emit(line)?;
        self.echo.emit(line)
    }

    fn header(&mut self, line: &str) -> io::Result<()> {
        self.output.header(line)
    }
}
