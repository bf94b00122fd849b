//! Page header recognition and skipping.
//!
//! Every report repeats a block of boilerplate lines at the top of each page.
//! A header block is `height` lines long and its first line is the line that
//! opened it: for most reports that is a zero-length line, for the customer
//! address and memo listings it is whatever line follows a full page of
//! records.

use log::{debug, trace};

use crate::line::{Line, LineCursor};

/// What opens a page header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTrigger {
    /// A zero-length line.
    BlankLine,
    /// The first line of the report, then the line after every
    /// `records_per_page`-th record. Blank lines are ordinary data.
    RecordCount { records_per_page: u32 },
}

/// How the paginator classifies a physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// Part of the lead-in before the first page; ignored.
    Prelude,
    /// First line of a page header block.
    PageHeader,
    Data,
}

#[derive(Debug, Clone)]
pub struct Paginator {
    trigger: PageTrigger,
    height: usize,
    first_height: usize,
    armed: bool,
    prelude_blanks: usize,
    pages: u32,
}

impl Paginator {
    /// Headers open on a zero-length line.
    pub fn blank_line(height: usize) -> Self {
        Self {
            trigger: PageTrigger::BlankLine,
            height,
            first_height: height,
            armed: false,
            prelude_blanks: 0,
            pages: 0,
        }
    }

    /// Headers open the report and follow every full page of records.
    pub fn every(records_per_page: u32, height: usize) -> Self {
        Self {
            trigger: PageTrigger::RecordCount { records_per_page },
            height,
            first_height: height,
            armed: true,
            prelude_blanks: 0,
            pages: 0,
        }
    }

    /// Use a different height for the first header block only.
    pub fn with_first_height(mut self, first_height: usize) -> Self {
        self.first_height = first_height;
        self
    }

    /// Ignore everything up to the `blank_lines`-th zero-length line, which
    /// then opens the first header.
    pub fn with_prelude(mut self, blank_lines: usize) -> Self {
        self.prelude_blanks = blank_lines;
        self
    }

    /// Number of header blocks skipped so far.
    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn classify(&mut self, line: &Line<'_>) -> LineRole {
        if self.prelude_blanks > 0 {
            if !line.is_empty() {
                return LineRole::Prelude;
            }
            self.prelude_blanks -= 1;
            if self.prelude_blanks > 0 {
                return LineRole::Prelude;
            }
            return LineRole::PageHeader;
        }
        match self.trigger {
            PageTrigger::BlankLine if line.is_empty() => LineRole::PageHeader,
            PageTrigger::RecordCount { .. } if self.armed => LineRole::PageHeader,
            _ => LineRole::Data,
        }
    }

    /// Consume the rest of a header block whose first line was just read.
    ///
    /// A report that ends inside a header still counts the page.
    pub fn skip_header(&mut self, opener: &Line<'_>, cursor: &mut LineCursor<'_>) {
        let height = if self.pages == 0 {
            self.first_height
        } else {
            self.height
        };
        let wanted = height.saturating_sub(1);
        let skipped = cursor.skip_lines(wanted);
        self.pages += 1;
        self.armed = false;
        debug!(
            "page {} header at line {} ({} lines)",
            self.pages,
            opener.number,
            skipped + 1
        );
        if skipped < wanted {
            trace!("report ends inside page header");
        }
    }

    /// Note a completed record; arms the next header on a page boundary.
    pub fn record_completed(&mut self, records: u32) {
        if let PageTrigger::RecordCount { records_per_page } = self.trigger
            && records_per_page > 0
            && records % records_per_page == 0
        {
            self.armed = true;
        }
    }
}
