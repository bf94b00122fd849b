//! Product sales history (IRH).
//!
//! The report opens with the business's history calendar, which runs up to
//! the second blank line; that blank line starts the first page header.
//! Each product takes three lines: the product line (first byte printed),
//! a second description with periods 1-12, and periods 13-24. A product
//! without history stops after the second line, which then carries a
//! `*** NO HISTORY RECORDS FOUND ***` marker instead of sales.

use log::trace;

use crate::assembler::{Feed, RecordAssembler};
use crate::field::{self, Column};
use crate::format::ReportRecord;
use crate::line::Line;
use crate::pagination::Paginator;

pub const PAGE_HEADER_LINES: usize = 7;
/// Blank lines up to and including the one that opens the first header.
pub const CALENDAR_BLANK_LINES: usize = 2;

pub const PERIODS: usize = 24;
const PERIODS_PER_LINE: usize = 12;
const PERIOD_OFFSET: usize = 27;
const PERIOD_WIDTH: usize = 8;

/// The second line only carries sales when it is longer than this.
const SALES_MIN_LEN: usize = 61;

pub mod layout {
    use crate::field::Column;

    pub const SKU: Column = Column::new("sku", 0, 11);
    pub const DESCRIPTION_1: Column = Column::new("description_1", 12, 25);
    pub const LOCATION: Column = Column::new("location", 38, 2);
    pub const AVG_COST: Column = Column::new("avg_cost", 40, 10);
    pub const LAST_COST: Column = Column::new("last_cost", 50, 10);
    pub const LAST_RECEIVED: Column = Column::new("last_received", 61, 8);
    pub const RETAIL_PRICE: Column = Column::new("retail_price", 70, 10);
    pub const AVAILABLE: Column = Column::new("available", 80, 7);
    pub const RESERVED: Column = Column::new("reserved", 87, 7);
    pub const ON_ORDER: Column = Column::new("on_order", 94, 7);
    pub const ORDER_POINT: Column = Column::new("order_point", 101, 7);
    pub const ORDER_QUANTITY: Column = Column::new("order_quantity", 108, 7);
    pub const CURRENT_PERIOD: Column = Column::new("current_period", 115, 8);
    pub const VENDOR: Column = Column::new("vendor", 124, 6);

    pub const DESCRIPTION_2: Column = Column::new("description_2", 2, 25);
}

pub fn paginator() -> Paginator {
    Paginator::blank_line(PAGE_HEADER_LINES).with_prelude(CALENDAR_BLANK_LINES)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    pub sku: String,
    pub description_1: String,
    pub description_2: String,
    pub location: String,
    pub avg_cost: String,
    pub last_cost: String,
    pub last_received: String,
    pub retail_price: String,
    pub available: String,
    pub reserved: String,
    pub on_order: String,
    pub order_point: String,
    pub order_quantity: String,
    pub current_period: String,
    pub vendor: String,
    pub has_history: bool,
    /// Unit sales per period, oldest year first.
    pub periods: [i32; PERIODS],
    /// Sum of each year's twelve periods.
    pub year_sales: [i32; 2],
}

impl Product {
    /// Read twelve periods of one year from a sales line.
    fn read_year(&mut self, line: &Line<'_>, year: usize) {
        let mut total = 0i32;
        for i in 0..PERIODS_PER_LINE {
            let column = Column::new("period", PERIOD_OFFSET + i * PERIOD_WIDTH, PERIOD_WIDTH);
            let units = line.integer(&column);
            self.periods[year * PERIODS_PER_LINE + i] = units;
            total = total.saturating_add(units);
        }
        self.year_sales[year] = total;
    }
}

impl ReportRecord for Product {
    const HEADER: &'static str = "SKU|CURRENT|P1|P2|P3|P4|P5|P6|P7|P8|P9|P10|P11|P12|P13|P14|P15|P16|P17|P18|P19|P20|P21|P22|P23|P24";

    fn debug_line(&self) -> String {
        let mut out = format!(
            "{:<11} {:<25} {:>2}{:>10}{:>10} {:>8} {:>10}{:>7}{:>7}{:>7}{:>7}{:>7}{:>8} {:>6}\n  {:<25}",
            self.sku,
            self.description_1,
            self.location,
            self.avg_cost,
            self.last_cost,
            self.last_received,
            self.retail_price,
            self.available,
            self.reserved,
            self.on_order,
            self.order_point,
            self.order_quantity,
            self.current_period,
            self.vendor,
            self.description_2,
        );
        if !self.has_history {
            out.push_str("  *** NO HISTORY RECORDS FOUND ***");
            return out;
        }
        for (year, periods) in self.periods.chunks(PERIODS_PER_LINE).enumerate() {
            if year > 0 {
                out.push('\n');
                out.push_str(&" ".repeat(PERIOD_OFFSET));
            }
            for units in periods {
                out.push_str(&format!("{units:>8}"));
            }
            out.push_str(&format!("{:>8}", self.year_sales[year]));
        }
        out
    }

    fn normalized_line(&self) -> String {
        let mut out = format!("{}|{}", self.sku, self.current_period);
        for units in &self.periods {
            out.push_str(&format!("|{units}"));
        }
        out
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Expect {
    /// Waiting for a product line.
    #[default]
    Product,
    /// Second description and the first year of sales.
    FirstYear,
    SecondYear,
}

/// True when a sales line carries no period figures at all.
fn blank_sales_window(line: &Line<'_>) -> bool {
    let sales = field::window(line.bytes, PERIOD_OFFSET, PERIODS_PER_LINE * PERIOD_WIDTH);
    field::trim(sales).is_empty()
}

#[derive(Debug, Default)]
pub struct ProductAssembler {
    current: Product,
    expect: Expect,
}

impl RecordAssembler for ProductAssembler {
    type Record = Product;

    fn feed(&mut self, line: &Line<'_>) -> Feed<Product> {
        use layout::*;

        match line.first() {
            Some(b'=') => return Feed::Terminate,
            Some(b) if b != b' ' => {
                self.current = Product {
                    sku: line.field(&SKU),
                    description_1: line.field(&DESCRIPTION_1),
                    location: line.field(&LOCATION),
                    avg_cost: line.field(&AVG_COST),
                    last_cost: line.field(&LAST_COST),
                    last_received: line.field(&LAST_RECEIVED),
                    retail_price: line.field(&RETAIL_PRICE),
                    available: line.field(&AVAILABLE),
                    reserved: line.field(&RESERVED),
                    on_order: line.field(&ON_ORDER),
                    order_point: line.field(&ORDER_POINT),
                    order_quantity: line.field(&ORDER_QUANTITY),
                    current_period: line.field(&CURRENT_PERIOD),
                    vendor: line.field(&VENDOR),
                    ..Product::default()
                };
                self.expect = Expect::FirstYear;
                return Feed::NeedMore;
            }
            _ => {}
        }

        match self.expect {
            Expect::Product => {
                trace!("line {}: outside any product", line.number);
                Feed::NeedMore
            }
            Expect::FirstYear => {
                self.current.description_2 = line.field(&DESCRIPTION_2);
                if line.len() > SALES_MIN_LEN
                    && line.last() != Some(b'*')
                    && !blank_sales_window(line)
                {
                    self.current.has_history = true;
                    self.current.read_year(line, 0);
                    self.expect = Expect::SecondYear;
                    Feed::NeedMore
                } else {
                    self.expect = Expect::Product;
                    Feed::Empty(std::mem::take(&mut self.current))
                }
            }
            Expect::SecondYear => {
                self.current.read_year(line, 1);
                self.expect = Expect::Product;
                Feed::Record(std::mem::take(&mut self.current))
            }
        }
    }

    fn page_break(&mut self) {
        self.expect = Expect::Product;
    }
}
