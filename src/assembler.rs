//! Record assembler trait.
//!
//! An assembler consumes the data lines of one report, one physical line at
//! a time, and decides when a logical record is complete.

use crate::format::ReportRecord;
use crate::line::Line;

/// Outcome of feeding one data line to an assembler.
#[derive(Debug, Clone, PartialEq)]
pub enum Feed<R> {
    /// The line was absorbed (or discarded); no record yet.
    NeedMore,
    /// A record is complete.
    Record(R),
    /// A record ended early with nothing more to read for it, such as a
    /// product without sales history. Emitted and counted like `Record`.
    Empty(R),
    /// The significant part of the report is over.
    Terminate,
}

pub trait RecordAssembler {
    type Record: ReportRecord;

    fn feed(&mut self, line: &Line<'_>) -> Feed<Self::Record>;

    /// Called after a page header has been skipped.
    fn page_break(&mut self) {}

    /// Secondary count surfaced in the summary (products for
    /// cross-references, customers for invoices).
    fn groups(&self) -> u32 {
        0
    }
}
