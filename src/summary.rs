//! Counters produced by one report run.

use std::fmt;

use crate::reports::ReportKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub kind: ReportKind,
    /// Logical records emitted.
    pub records: u32,
    /// Page header blocks skipped.
    pub pages: u32,
    /// Products opened (cross-references) or customer accounts seen
    /// (invoices). Zero for the other reports.
    pub groups: u32,
    /// Part of the invoice summary line, but the scan never accumulates
    /// it, so it is always zero.
    pub total_owed: u32,
}

impl ReportSummary {
    pub fn new(kind: ReportKind) -> Self {
        Self {
            kind,
            records: 0,
            pages: 0,
            groups: 0,
            total_owed: 0,
        }
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ReportKind::CrossReferences => write!(
                f,
                "Processed a total of {} cross-references in {} products ({} pages).",
                self.records, self.groups, self.pages
            ),
            ReportKind::Invoices => write!(
                f,
                "Processed a total of {} invoices (${}) in {} customers ({} pages).",
                self.records, self.total_owed, self.groups, self.pages
            ),
            kind => write!(
                f,
                "Processed a total of {} {} ({} pages).",
                self.records,
                kind.noun(),
                self.pages
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_simple() {
        let summary = ReportSummary {
            records: 12,
            pages: 2,
            ..ReportSummary::new(ReportKind::Classes)
        };
        assert_eq!(
            summary.to_string(),
            "Processed a total of 12 classes (2 pages)."
        );
    }

    #[test]
    fn test_display_cross_references() {
        let summary = ReportSummary {
            records: 7,
            pages: 1,
            groups: 3,
            ..ReportSummary::new(ReportKind::CrossReferences)
        };
        assert_eq!(
            summary.to_string(),
            "Processed a total of 7 cross-references in 3 products (1 pages)."
        );
    }

    #[test]
    fn test_display_invoices() {
        let summary = ReportSummary {
            records: 4,
            pages: 1,
            groups: 2,
            ..ReportSummary::new(ReportKind::Invoices)
        };
        assert_eq!(
            summary.to_string(),
            "Processed a total of 4 invoices ($0) in 2 customers (1 pages)."
        );
    }
}
