mod report_builder;

pub use report_builder::{ReportBuilder, layout_line};
