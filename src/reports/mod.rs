//! Report types and their drivers.
//!
//! Each submodule holds one report's layout table, record type and
//! assembler. [`ReportKind::run`] wires them to a paginator and the shared
//! [`ReportDriver`].

pub mod classes;
pub mod customers;
pub mod history;
pub mod invoices;
pub mod xrefs;

use std::fmt;

use crate::driver::ReportDriver;
use crate::error::ConvertError;
use crate::format::OutputMode;
use crate::sink::LineSink;
use crate::summary::ReportSummary;

/// The legacy reports this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ReportKind {
    /// Class listing (IRK).
    Classes,
    /// Product cross-reference listing (IRX).
    #[value(name = "xrefs", alias = "cross-references")]
    CrossReferences,
    /// Customer account listing with balances (IRL).
    #[value(name = "accounts")]
    Balances,
    /// Customer address listing (IRL).
    Addresses,
    /// Customer memo listing (IRL).
    Memos,
    /// Product sales history (IRH).
    History,
    /// Open invoices by customer (RRT).
    Invoices,
}

impl ReportKind {
    pub const ALL: [ReportKind; 7] = [
        Self::Classes,
        Self::CrossReferences,
        Self::Balances,
        Self::Addresses,
        Self::Memos,
        Self::History,
        Self::Invoices,
    ];

    /// What the summary line calls one record.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Classes => "classes",
            Self::CrossReferences => "cross-references",
            Self::Balances => "accounts",
            Self::Addresses => "addresses",
            Self::Memos => "memos",
            Self::History => "products",
            Self::Invoices => "invoices",
        }
    }

    /// Convert one whole report held in `buffer`.
    pub fn run<S: LineSink + ?Sized>(
        self,
        buffer: &[u8],
        sink: &mut S,
        mode: OutputMode,
    ) -> Result<ReportSummary, ConvertError> {
        match self {
            Self::Classes => {
                ReportDriver::new(self, classes::ClassAssembler, classes::paginator())
                    .run(buffer, sink, mode)
            }
            Self::CrossReferences => ReportDriver::new(
                self,
                xrefs::CrossReferenceAssembler::default(),
                xrefs::paginator(),
            )
            .run(buffer, sink, mode),
            Self::Balances => ReportDriver::new(
                self,
                customers::BalanceAssembler,
                customers::balance_paginator(),
            )
            .run(buffer, sink, mode),
            Self::Addresses => ReportDriver::new(
                self,
                customers::AddressAssembler::default(),
                customers::address_paginator(),
            )
            .run(buffer, sink, mode),
            Self::Memos => ReportDriver::new(
                self,
                customers::MemoAssembler::default(),
                customers::memo_paginator(),
            )
            .run(buffer, sink, mode),
            Self::History => ReportDriver::new(
                self,
                history::ProductAssembler::default(),
                history::paginator(),
            )
            .run(buffer, sink, mode),
            Self::Invoices => ReportDriver::new(
                self,
                invoices::InvoiceAssembler::default(),
                invoices::paginator(),
            )
            .run(buffer, sink, mode),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Classes => "classes",
            Self::CrossReferences => "xrefs",
            Self::Balances => "accounts",
            Self::Addresses => "addresses",
            Self::Memos => "memos",
            Self::History => "history",
            Self::Invoices => "invoices",
        };
        f.write_str(name)
    }
}

/// Build a report line with `fields` placed at their byte offsets.
///
/// Kept in step with `layout_line` in `tests/common/report_builder.rs`.
#[cfg(test)]
pub(crate) fn layout_line(fields: &[(usize, &str)]) -> String {
    let mut line = Vec::new();
    for &(offset, text) in fields {
        let end = offset + text.len();
        if line.len() < end {
            line.resize(end, b' ');
        }
        line[offset..end].copy_from_slice(text.as_bytes());
    }
    String::from_utf8(line).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_layout_line_places_fields() {
        assert_eq!(layout_line(&[(2, "AB"), (6, "C")]), "  AB  C");
    }

    #[test]
    fn test_cli_names_round_trip_display() {
        for kind in ReportKind::ALL {
            let parsed = ReportKind::from_str(&kind.to_string(), false).unwrap();
            assert_eq!(parsed, kind);
        }
        assert_eq!(
            ReportKind::from_str("cross-references", false).unwrap(),
            ReportKind::CrossReferences
        );
    }

    #[test]
    fn test_every_kind_handles_empty_input() {
        for kind in ReportKind::ALL {
            let mut out: Vec<String> = Vec::new();
            let summary = kind.run(b"", &mut out, OutputMode::Normalized).unwrap();
            assert_eq!(summary.records, 0, "{kind}");
            assert_eq!(out.len(), 1, "{kind}");
        }
    }

    #[test]
    fn test_every_kind_survives_garbage() {
        let garbage = "\n\u{1}\u{2}xx\n\n-\n=\n;;;;\n   .   \n".repeat(40);
        for kind in ReportKind::ALL {
            let mut out: Vec<String> = Vec::new();
            assert!(kind.run(garbage.as_bytes(), &mut out, OutputMode::Debug).is_ok());
            assert!(kind.run(garbage.as_bytes(), &mut out, OutputMode::Normalized).is_ok());
        }
    }
}
