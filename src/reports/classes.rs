//! Class listing (IRK).
//!
//! One line per class. Section headers repeated in the body have no class
//! id and are dropped. The listing ends at the first line whose last byte
//! is a dash.

use log::trace;

use crate::assembler::{Feed, RecordAssembler};
use crate::field::Column;
use crate::format::ReportRecord;
use crate::line::Line;
use crate::pagination::Paginator;

pub const PAGE_HEADER_LINES: usize = 8;

pub const CLASS_ID: Column = Column::new("class_id", 18, 4);
pub const DESCRIPTION: Column = Column::new("description", 25, 32);
pub const HISTORY_PERIODS: Column = Column::new("history_periods", 57, 2);

pub fn paginator() -> Paginator {
    Paginator::blank_line(PAGE_HEADER_LINES)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Class {
    pub class_id: String,
    pub description: String,
    pub history_periods: i32,
    /// Last byte of the line.
    pub history_by_class: char,
}

impl ReportRecord for Class {
    const HEADER: &'static str = "Class|Description";

    fn debug_line(&self) -> String {
        format!(
            "{:18}{:<4}   {:<30}  {:<2}              {}",
            "", self.class_id, self.description, self.history_periods, self.history_by_class
        )
    }

    fn normalized_line(&self) -> String {
        format!("{}|{}", self.class_id, self.description)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassAssembler;

impl RecordAssembler for ClassAssembler {
    type Record = Class;

    fn feed(&mut self, line: &Line<'_>) -> Feed<Class> {
        if line.last() == Some(b'-') {
            return Feed::Terminate;
        }

        let class_id = line.field(&CLASS_ID);
        if class_id.is_empty() {
            trace!("line {}: class section header", line.number);
            return Feed::NeedMore;
        }

        Feed::Record(Class {
            class_id,
            description: line.field(&DESCRIPTION),
            history_periods: line.integer(&HISTORY_PERIODS),
            history_by_class: line.last().map_or(' ', char::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputMode;
    use crate::line::LineCursor;
    use crate::reports::{ReportKind, layout_line};

    fn feed(text: &str) -> Feed<Class> {
        let buffer = format!("{text}\n");
        let line = LineCursor::new(buffer.as_bytes()).next().unwrap();
        ClassAssembler.feed(&line)
    }

    fn class_line(id: &str, description: &str, periods: &str, flag: &str) -> String {
        layout_line(&[(18, id), (25, description), (57, periods), (75, flag)])
    }

    #[test]
    fn test_class_line() {
        let Feed::Record(class) = feed(&class_line("HW", "HARDWARE", "12", "Y")) else {
            panic!("expected a record");
        };
        assert_eq!(class.class_id, "HW");
        assert_eq!(class.description, "HARDWARE");
        assert_eq!(class.history_periods, 12);
        assert_eq!(class.history_by_class, 'Y');
    }

    #[test]
    fn test_section_header_is_discarded() {
        let line = layout_line(&[(2, "DEPARTMENT 10"), (40, "N")]);
        assert_eq!(feed(&line), Feed::NeedMore);
    }

    #[test]
    fn test_trailing_dash_terminates() {
        assert_eq!(feed(&class_line("HW", "HARDWARE", "12", "-")), Feed::Terminate);
        assert_eq!(feed("----------"), Feed::Terminate);
    }

    #[test]
    fn test_renderings() {
        let class = Class {
            class_id: "PL".to_string(),
            description: "PLUMBING".to_string(),
            history_periods: 6,
            history_by_class: 'N',
        };
        assert_eq!(class.render(OutputMode::Normalized), "PL|PLUMBING");
        let debug = class.render(OutputMode::Debug);
        assert_eq!(&debug[18..22], "PL  ");
        assert_eq!(&debug[25..33], "PLUMBING");
        assert_eq!(&debug[57..59], "6 ");
        assert!(debug.ends_with("              N"));
    }

    #[test]
    fn test_report_stops_at_dash_line() {
        let mut text = String::from("\n");
        for h in 1..PAGE_HEADER_LINES {
            text.push_str(&format!("IRK CLASS LISTING HEADER {h}\n"));
        }
        text.push_str(&class_line("HW", "HARDWARE", "12", "Y"));
        text.push('\n');
        text.push_str(&layout_line(&[(2, "SECTION")]));
        text.push('\n');
        text.push_str(&class_line("PL", "PLUMBING", "6", "N"));
        text.push('\n');
        text.push_str(&class_line("EL", "ELECTRICAL", "6", "-"));
        text.push('\n');
        text.push_str(&class_line("XX", "AFTER THE END", "1", "Y"));
        text.push('\n');

        let mut out: Vec<String> = Vec::new();
        let summary = ReportKind::Classes
            .run(text.as_bytes(), &mut out, OutputMode::Normalized)
            .unwrap();
        assert_eq!(out, vec!["Class|Description", "HW|HARDWARE", "PL|PLUMBING"]);
        assert_eq!(summary.records, 2);
        assert_eq!(summary.pages, 1);
    }
}
