//! Open invoices by customer (RRT subsidiary report).
//!
//! Invoices are grouped under short customer lines whose first token is the
//! account id. Every invoice line belongs to the most recent customer line.
//! Subtotal lines sit between groups and a `Cust Loc:` summary ends the
//! body. The first page header is one line taller than the rest.

use crate::assembler::{Feed, RecordAssembler};
use crate::format::ReportRecord;
use crate::line::Line;
use crate::pagination::Paginator;

pub const FIRST_PAGE_HEADER_LINES: usize = 6;
pub const PAGE_HEADER_LINES: usize = 5;

/// Lines shorter than this are customer (or summary) lines.
const ACCOUNT_LINE_MAX: usize = 60;
const SUMMARY_LABEL: &str = "Cust Loc:";
/// A `.` here marks a subtotal line.
const SUBTOTAL_MARK: usize = 51;
/// Amounts can only carry a trailing minus on lines longer than this.
const SIGNED_MIN_LEN: usize = 130;

pub mod layout {
    use crate::field::Column;

    pub const CREDIT_MEMO: Column = Column::new("credit_memo", 41, 3);
    pub const LOCATION: Column = Column::new("location", 45, 2);
    pub const PAYMENT_CODE: Column = Column::new("payment_code", 48, 2);
    pub const INVOICE: Column = Column::new("invoice", 51, 6);
    pub const TRANSACTION_TYPE: Column = Column::new("transaction_type", 59, 3);
    pub const REFERENCE: Column = Column::new("reference", 63, 6);
    pub const DATE: Column = Column::new("date", 70, 8);
    pub const TRANSACTION_AMOUNT: Column = Column::new("transaction_amount", 108, 10);
    pub const AMOUNT: Column = Column::new("amount", 120, 10);
}

pub fn paginator() -> Paginator {
    Paginator::blank_line(PAGE_HEADER_LINES).with_first_height(FIRST_PAGE_HEADER_LINES)
}

/// The customer every following invoice line belongs to.
///
/// Set by customer lines and kept across pages until the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentAccount {
    id: String,
}

impl CurrentAccount {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Take the account id from a customer line: its text up to the first
    /// space. A line with no leading token keeps the previous account.
    pub fn open(&mut self, line: &[u8]) {
        let token = line.split(|&b| b == b' ').next().unwrap_or_default();
        if !token.is_empty() {
            self.id = String::from_utf8_lossy(token).into_owned();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invoice {
    pub account: String,
    pub credit_memo: String,
    pub location: String,
    pub payment_code: String,
    pub invoice: String,
    pub transaction_type: String,
    pub reference: String,
    pub date: String,
    pub transaction_amount: String,
    pub amount: String,
    pub negative: bool,
}

impl ReportRecord for Invoice {
    const HEADER: &'static str = "Cust ID|Invoice|Date|Amount";

    fn debug_line(&self) -> String {
        let sign = if self.negative { "-" } else { "" };
        format!(
            "{:>9}-00{:>32}{:>3}{:>3}{:>7}{:>5} {:<6}{:>9} {:>39}{sign} {:>11}{sign}",
            self.account,
            self.credit_memo,
            self.location,
            self.payment_code,
            self.invoice,
            self.transaction_type,
            self.reference,
            self.date,
            self.transaction_amount,
            self.amount,
        )
    }

    fn normalized_line(&self) -> String {
        let sign = if self.negative { "-" } else { "" };
        format!("{}|{}|{}|{sign}{}", self.account, self.invoice, self.date, self.amount)
    }
}

#[derive(Debug, Default)]
pub struct InvoiceAssembler {
    account: CurrentAccount,
    accounts: u32,
}

impl InvoiceAssembler {
    pub fn account(&self) -> &CurrentAccount {
        &self.account
    }
}

impl RecordAssembler for InvoiceAssembler {
    type Record = Invoice;

    fn feed(&mut self, line: &Line<'_>) -> Feed<Invoice> {
        use layout::*;

        if line.len() < ACCOUNT_LINE_MAX {
            if line.text().contains(SUMMARY_LABEL) {
                return Feed::Terminate;
            }
            self.account.open(line.bytes);
            self.accounts += 1;
            return Feed::NeedMore;
        }

        if line.char_at(SUBTOTAL_MARK) == '.' {
            return Feed::NeedMore;
        }

        Feed::Record(Invoice {
            account: self.account.id().to_string(),
            credit_memo: line.field(&CREDIT_MEMO),
            location: line.field(&LOCATION),
            payment_code: line.field(&PAYMENT_CODE),
            invoice: line.field(&INVOICE),
            transaction_type: line.field(&TRANSACTION_TYPE),
            reference: line.field(&REFERENCE),
            date: line.field(&DATE),
            transaction_amount: line.field(&TRANSACTION_AMOUNT),
            amount: line.field(&AMOUNT),
            negative: line.len() > SIGNED_MIN_LEN && line.last() == Some(b'-'),
        })
    }

    fn groups(&self) -> u32 {
        self.accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputMode;
    use crate::line::LineCursor;
    use crate::reports::{ReportKind, layout_line};

    fn invoice_line(invoice: &str, date: &str, amount: &str, negative: bool) -> String {
        let mut line = layout_line(&[
            (41, "CM"),
            (45, "01"),
            (48, "30"),
            (51, invoice),
            (59, "INV"),
            (63, "PO123"),
            (70, date),
            (108, amount),
            (120, amount),
        ]);
        line.push_str(&" ".repeat(131 - line.len()));
        if negative {
            line.push('-');
        }
        line
    }

    fn subtotal_line() -> String {
        layout_line(&[(51, "."), (120, "400.00")])
    }

    #[test]
    fn test_current_account_token() {
        let mut account = CurrentAccount::default();
        account.open(b"1234 CASTLE HARDWARE");
        assert_eq!(account.id(), "1234");
        account.open(b"  continued");
        assert_eq!(account.id(), "1234");
        account.open(b"77");
        assert_eq!(account.id(), "77");
    }

    #[test]
    fn test_invoices_inherit_account() {
        let text = [
            "1234 CASTLE HARDWARE".to_string(),
            invoice_line("A10001", "01/10/24", "150.00", false),
            invoice_line("A10002", "02/10/24", "25.50", true),
            subtotal_line(),
            "5678 BOB'S BAIT".to_string(),
            invoice_line("A10003", "03/10/24", "9.99", false),
        ]
        .iter()
        .map(|l| format!("{l}\n"))
        .collect::<String>();

        let mut assembler = InvoiceAssembler::default();
        let rows: Vec<String> = LineCursor::new(text.as_bytes())
            .filter_map(|line| match assembler.feed(&line) {
                Feed::Record(invoice) => Some(invoice.normalized_line()),
                _ => None,
            })
            .collect();
        assert_eq!(
            rows,
            vec![
                "1234|A10001|01/10/24|150.00",
                "1234|A10002|02/10/24|-25.50",
                "5678|A10003|03/10/24|9.99",
            ]
        );
        assert_eq!(assembler.groups(), 2);
        assert_eq!(assembler.account().id(), "5678");
    }

    #[test]
    fn test_summary_label_terminates() {
        let mut assembler = InvoiceAssembler::default();
        let text = "Cust Loc: 01  Total\n";
        let line = LineCursor::new(text.as_bytes()).next().unwrap();
        assert_eq!(assembler.feed(&line), Feed::Terminate);
    }

    #[test]
    fn test_debug_line_signs_both_amounts() {
        let invoice = Invoice {
            account: "1234".to_string(),
            invoice: "A10002".to_string(),
            transaction_amount: "25.50".to_string(),
            amount: "25.50".to_string(),
            negative: true,
            ..Invoice::default()
        };
        let debug = invoice.debug_line();
        assert!(debug.starts_with("     1234-00"));
        assert!(debug.ends_with("25.50-       25.50-"));
    }

    #[test]
    fn test_report_with_short_first_header() {
        let mut text = String::from("\nH1\nH2\nH3\nH4\nH5\n1234 CASTLE HARDWARE\n");
        text.push_str(&invoice_line("A10001", "01/10/24", "150.00", false));
        text.push_str("\n\nH1\nH2\nH3\nH4\n");
        text.push_str(&invoice_line("A10002", "02/10/24", "10.00", false));
        text.push('\n');
        text.push_str("Cust Loc: 01   Total\n");
        text.push_str(&invoice_line("A99999", "09/09/24", "1.00", false));
        text.push('\n');

        let mut out: Vec<String> = Vec::new();
        let summary = ReportKind::Invoices
            .run(text.as_bytes(), &mut out, OutputMode::Normalized)
            .unwrap();
        assert_eq!(
            out,
            vec![
                "Cust ID|Invoice|Date|Amount",
                "1234|A10001|01/10/24|150.00",
                "1234|A10002|02/10/24|10.00",
            ]
        );
        assert_eq!(summary.records, 2);
        assert_eq!(summary.groups, 1);
        assert_eq!(summary.pages, 2);
        assert_eq!(summary.total_owed, 0);
    }
}
