//! # pmconvert-rs
//!
//! Converts paginated fixed-width ProfitMaster reports into pipe-delimited
//! files for the CashierPRO point-of-sale import.
//!
//! ## Overview
//!
//! Every report shares one processing pattern:
//! - **Line cursor**: the report is held in memory and scanned one physical
//!   line at a time
//! - **Pagination**: repeating page header blocks are recognized and skipped
//! - **Assembly**: one logical record is built from one to four physical
//!   lines using fixed byte offsets
//! - **Formatting**: each record becomes a pipe-delimited row, or a
//!   reconstruction of the source layout in debug mode
//!
//! Only the layout tables and the record assembly differ per report.
//!
//! ## Example
//!
//! ```
//! use pmconvert_rs::{OutputMode, ReportKind};
//!
//! let mut report = String::from("\n");
//! for n in 1..8 {
//!     report.push_str(&format!("IRK CLASS LISTING {n}\n"));
//! }
//! report.push_str(&format!("{:18}{:<7}{:<32}{:<18}Y\n", "", "HW", "HARDWARE", "12"));
//!
//! let mut rows: Vec<String> = Vec::new();
//! let summary = ReportKind::Classes
//!     .run(report.as_bytes(), &mut rows, OutputMode::Normalized)
//!     .unwrap();
//!
//! assert_eq!(rows, ["Class|Description", "HW|HARDWARE"]);
//! assert_eq!(summary.records, 1);
//! assert_eq!(summary.pages, 1);
//! ```

pub mod assembler;
pub mod convert;
pub mod driver;
pub mod error;
pub mod field;
pub mod format;
pub mod line;
pub mod pagination;
pub mod reports;
pub mod sink;
pub mod summary;

pub use assembler::{Feed, RecordAssembler};
pub use convert::{ConvertOptions, convert_file, create_output, read_report};
pub use driver::ReportDriver;
pub use error::ConvertError;
pub use field::{Column, extract, parse_int};
pub use format::{OutputMode, ReportRecord};
pub use line::{Line, LineCursor};
pub use pagination::{LineRole, PageTrigger, Paginator};
pub use reports::ReportKind;
pub use sink::{LineSink, Tee, WriteSink};
pub use summary::ReportSummary;
