//! Report driver.
//!
//! Pushes each physical line of a buffer through the paginator and then the
//! record assembler, rendering every completed record to the sink before the
//! next line is read. The scan is a single forward pass: output order is
//! input order, and at most one record is held at a time.

use log::{debug, info, trace};

use crate::assembler::{Feed, RecordAssembler};
use crate::error::ConvertError;
use crate::format::{OutputMode, ReportRecord};
use crate::line::LineCursor;
use crate::pagination::{LineRole, Paginator};
use crate::reports::ReportKind;
use crate::sink::LineSink;
use crate::summary::ReportSummary;

#[derive(Debug)]
pub struct ReportDriver<A> {
    kind: ReportKind,
    assembler: A,
    paginator: Paginator,
}

impl<A: RecordAssembler> ReportDriver<A> {
    pub fn new(kind: ReportKind, assembler: A, paginator: Paginator) -> Self {
        Self {
            kind,
            assembler,
            paginator,
        }
    }

    /// Scan `buffer` to its end or to the report's terminator.
    ///
    /// Malformed report text never fails the run; only the sink can.
    pub fn run<S: LineSink + ?Sized>(
        mut self,
        buffer: &[u8],
        sink: &mut S,
        mode: OutputMode,
    ) -> Result<ReportSummary, ConvertError> {
        if mode == OutputMode::Normalized {
            sink.header(<A::Record as ReportRecord>::HEADER)?;
        }

        let mut records = 0u32;
        let mut terminated = false;
        let mut cursor = LineCursor::new(buffer);
        while let Some(line) = cursor.next() {
            match self.paginator.classify(&line) {
                LineRole::Prelude => continue,
                LineRole::PageHeader => {
                    self.paginator.skip_header(&line, &mut cursor);
                    self.assembler.page_break();
                    continue;
                }
                LineRole::Data => {}
            }

            let record = match self.assembler.feed(&line) {
                Feed::NeedMore => continue,
                Feed::Record(record) => record,
                Feed::Empty(record) => {
                    trace!("line {}: record closed early", line.number);
                    record
                }
                Feed::Terminate => {
                    debug!(
                        "{} terminator at line {} (byte {}), ignoring {} trailing bytes",
                        self.kind,
                        line.number,
                        line.start,
                        cursor.remaining().len()
                    );
                    terminated = true;
                    break;
                }
            };

            sink.emit(&record.render(mode))?;
            records += 1;
            self.paginator.record_completed(records);
        }

        if !terminated && !cursor.remaining().is_empty() {
            trace!("ignoring unterminated last line");
        }

        let summary = ReportSummary {
            records,
            pages: self.paginator.pages(),
            groups: self.assembler.groups(),
            ..ReportSummary::new(self.kind)
        };
        info!("{summary}");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Line;

    /// Two-line test record: the first line opens, the second closes.
    #[derive(Debug, Default, Clone, PartialEq)]
    struct Pair {
        head: String,
        tail: String,
    }

    impl ReportRecord for Pair {
        const HEADER: &'static str = "Head|Tail";

        fn debug_line(&self) -> String {
            format!("{:<6}{}", self.head, self.tail)
        }

        fn normalized_line(&self) -> String {
            format!("{}|{}", self.head, self.tail)
        }
    }

    #[derive(Default)]
    struct PairAssembler {
        current: Option<Pair>,
    }

    impl RecordAssembler for PairAssembler {
        type Record = Pair;

        fn feed(&mut self, line: &Line<'_>) -> Feed<Pair> {
            if line.first() == Some(b'=') {
                return Feed::Terminate;
            }
            match self.current.take() {
                None => {
                    self.current = Some(Pair {
                        head: line.text().trim().to_string(),
                        ..Pair::default()
                    });
                    Feed::NeedMore
                }
                Some(mut pair) => {
                    pair.tail = line.text().trim().to_string();
                    Feed::Record(pair)
                }
            }
        }
    }

    fn run(text: &str, mode: OutputMode) -> (Vec<String>, ReportSummary) {
        let mut out = Vec::new();
        let summary = ReportDriver::new(
            ReportKind::Classes,
            PairAssembler::default(),
            Paginator::blank_line(2),
        )
        .run(text.as_bytes(), &mut out, mode)
        .unwrap();
        (out, summary)
    }

    #[test]
    fn test_header_then_rows_in_order() {
        let (out, summary) = run("\nHDR\na\n1\nb\n2\n", OutputMode::Normalized);
        assert_eq!(out, vec!["Head|Tail", "a|1", "b|2"]);
        assert_eq!(summary.records, 2);
        assert_eq!(summary.pages, 1);
    }

    #[test]
    fn test_debug_mode_has_no_header() {
        let (out, _) = run("\nHDR\na\n1\n", OutputMode::Debug);
        assert_eq!(out, vec!["a     1"]);
    }

    #[test]
    fn test_terminate_stops_scan() {
        let (out, summary) = run("\nHDR\na\n1\n=== TOTALS\nb\n2\n", OutputMode::Normalized);
        assert_eq!(out.len(), 2);
        assert_eq!(summary.records, 1);
    }

    #[test]
    fn test_row_count_matches_summary() {
        let mut text = String::new();
        for page in 0..5 {
            text.push_str("\nHDR\n");
            for i in 0..3 {
                text.push_str(&format!("{page}\n{i}\n"));
            }
        }
        let (out, summary) = run(&text, OutputMode::Normalized);
        assert_eq!(out.len() - 1, summary.records as usize);
        assert_eq!(summary.records, 15);
        assert_eq!(summary.pages, 5);
    }

    #[test]
    fn test_unterminated_tail_is_ignored() {
        let (out, summary) = run("\nHDR\na\n1\nb\n2", OutputMode::Normalized);
        assert_eq!(out, vec!["Head|Tail", "a|1"]);
        assert_eq!(summary.records, 1);
    }

    #[test]
    fn test_empty_buffer_writes_only_header() {
        let (out, summary) = run("", OutputMode::Normalized);
        assert_eq!(out, vec!["Head|Tail"]);
        assert_eq!(summary.records, 0);
        assert_eq!(summary.pages, 0);
    }
}
