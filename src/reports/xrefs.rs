//! Product cross-reference listing (IRX).
//!
//! One line per cross-reference (UPC). The class, SKU, description and
//! vendor columns are printed only on the first line of a product; later
//! lines leave them blank and inherit the last value seen anywhere earlier
//! in the report.

use crate::assembler::{Feed, RecordAssembler};
use crate::field::Column;
use crate::format::ReportRecord;
use crate::line::Line;
use crate::pagination::Paginator;

pub const PAGE_HEADER_LINES: usize = 7;

pub const CLASS: Column = Column::new("class", 2, 4);
pub const SKU: Column = Column::new("sku", 8, 11);
pub const DESCRIPTION: Column = Column::new("description", 21, 25);
pub const REFERENCE: Column = Column::new("reference", 48, 15);
pub const VENDOR: Column = Column::new("vendor", 70, 6);

/// A non-blank byte here on a long line marks the report footer.
const FOOTER_MARK: usize = 66;

pub fn paginator() -> Paginator {
    Paginator::blank_line(PAGE_HEADER_LINES)
}

/// Values inherited by lines that leave their column blank.
///
/// Lives for a whole report run; pages and records do not reset it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarryForward {
    pub class: String,
    pub sku: String,
    pub description: String,
    pub vendor: String,
}

impl CarryForward {
    /// Take every value the line states explicitly.
    pub fn absorb(&mut self, line: &CrossReference) {
        for (slot, value) in [
            (&mut self.class, &line.class),
            (&mut self.sku, &line.product_id),
            (&mut self.description, &line.description),
            (&mut self.vendor, &line.vendor),
        ] {
            if !value.is_empty() {
                slot.clone_from(value);
            }
        }
    }
}

/// One cross-reference line. The line-local columns are empty when the
/// line omits them; `current` holds the values in effect for the line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossReference {
    pub class: String,
    pub product_id: String,
    pub description: String,
    pub reference: String,
    pub vendor: String,
    pub current: CarryForward,
}

impl ReportRecord for CrossReference {
    const HEADER: &'static str = "SKU Number|UPC";

    fn debug_line(&self) -> String {
        format!(
            "  {:<4}  {:<11}  {:<25}  {:<21} {:>6}",
            self.class, self.product_id, self.description, self.reference, self.vendor
        )
    }

    fn normalized_line(&self) -> String {
        format!("{}|{}", self.current.sku, self.reference)
    }
}

#[derive(Debug, Default)]
pub struct CrossReferenceAssembler {
    carry: CarryForward,
    products: u32,
}

impl CrossReferenceAssembler {
    pub fn carry(&self) -> &CarryForward {
        &self.carry
    }
}

/// Read a column only when its first byte is printed.
fn leading(line: &Line<'_>, column: &Column) -> String {
    if line.char_at(column.offset) == ' ' {
        String::new()
    } else {
        line.field(column)
    }
}

impl RecordAssembler for CrossReferenceAssembler {
    type Record = CrossReference;

    fn feed(&mut self, line: &Line<'_>) -> Feed<CrossReference> {
        if line.len() > FOOTER_MARK && line.char_at(FOOTER_MARK) != ' ' {
            return Feed::Terminate;
        }

        let mut xref = CrossReference {
            class: leading(line, &CLASS),
            product_id: leading(line, &SKU),
            description: leading(line, &DESCRIPTION),
            reference: line.field(&REFERENCE),
            ..CrossReference::default()
        };
        if line.len() > VENDOR.offset {
            xref.vendor = line.field(&VENDOR);
        }
        if !xref.product_id.is_empty() {
            self.products += 1;
        }

        self.carry.absorb(&xref);
        xref.current = self.carry.clone();
        Feed::Record(xref)
    }

    fn groups(&self) -> u32 {
        self.products
    }
}
