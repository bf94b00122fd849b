//! Customer listings (IRL): account balances, addresses and memos.
//!
//! The three listings come from the same report program but share nothing
//! beyond the customer id. The balance listing is one line per account and
//! paginates on blank lines. The address and memo listings print a fixed
//! number of accounts per page, so their headers are found by counting
//! records instead.

use log::trace;

use crate::assembler::{Feed, RecordAssembler};
use crate::field::Column;
use crate::format::{self, ReportRecord};
use crate::line::Line;
use crate::pagination::Paginator;

/// Printed in the debug layout when an address has no phone or fax.
const EXCHANGE_PREFIX: &str = "(807) 597-";

// ---------------------------------------------------------------------------
// Account balances
// ---------------------------------------------------------------------------

pub const BALANCE_HEADER_LINES: usize = 8;

pub mod balance_layout {
    use crate::field::Column;

    pub const LOCATION: Column = Column::new("location", 0, 2);
    pub const ID: Column = Column::new("id", 3, 9);
    pub const TYPE: usize = 13;
    pub const TAX_AUTHORITY: Column = Column::new("tax_authority", 16, 4);
    pub const PRICE_LEVEL: usize = 21;
    pub const PAYMENT_CODE: Column = Column::new("payment_code", 23, 2);
    pub const NAME: Column = Column::new("name", 26, 26);
    pub const PHONE: Column = Column::new("phone", 53, 8);
    pub const CREDIT_LIMIT: Column = Column::new("credit_limit", 62, 7);
    pub const BALANCE: Column = Column::new("balance", 70, 10);
    pub const BALANCE_CREDIT: Column = Column::new("balance_credit", 80, 2);
    pub const YTD_SALES: Column = Column::new("ytd_sales", 82, 8);
    pub const YTD_SALES_CREDIT: Column = Column::new("ytd_sales_credit", 90, 2);
    pub const YTD_FINANCE_CHARGES: Column = Column::new("ytd_finance_charges", 92, 12);
    pub const DATE_SETUP: Column = Column::new("date_account_setup", 104, 8);
    pub const DATE_LAST_PAYMENT: Column = Column::new("date_last_payment", 114, 8);
    pub const DATE_LAST_PURCHASE: Column = Column::new("date_last_purchase", 124, 8);

    /// The totals line at the end of the listing is exactly this long.
    pub const TOTALS_LINE_LEN: usize = 69;
}

pub fn balance_paginator() -> Paginator {
    Paginator::blank_line(BALANCE_HEADER_LINES)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountBalance {
    pub location: String,
    pub id: String,
    pub account_type: char,
    pub tax_authority: String,
    pub price_level: char,
    pub payment_code: String,
    pub name: String,
    pub phone_number: String,
    pub credit_limit: String,
    pub balance: String,
    pub balance_credit: String,
    pub ytd_sales: String,
    pub ytd_sales_credit: String,
    pub ytd_finance_charges: String,
    pub date_account_setup: String,
    pub date_last_payment: String,
    pub date_last_purchase: String,
}

impl ReportRecord for AccountBalance {
    const HEADER: &'static str = "Cust ID|Credit Limit|Current Balance";

    fn debug_line(&self) -> String {
        format!(
            "{:>2} {:>9}-{}  {:<4} {} {} {:<26} {:>8} {:>7} {:>10}{} {:>10}{} {:>11} {:<9} {:<9} {:>8}",
            self.location,
            self.id,
            self.account_type,
            self.tax_authority,
            self.price_level,
            self.payment_code,
            self.name,
            self.phone_number,
            self.credit_limit,
            self.balance,
            self.balance_credit,
            self.ytd_sales,
            self.ytd_sales_credit,
            self.ytd_finance_charges,
            self.date_account_setup,
            self.date_last_payment,
            self.date_last_purchase,
        )
    }

    fn normalized_line(&self) -> String {
        format!(
            "{}|{}|{}",
            self.id,
            format::credit_limit(&self.credit_limit),
            format::signed_balance(&self.balance, &self.balance_credit)
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceAssembler;

impl RecordAssembler for BalanceAssembler {
    type Record = AccountBalance;

    fn feed(&mut self, line: &Line<'_>) -> Feed<AccountBalance> {
        use balance_layout::*;

        if line.len() == TOTALS_LINE_LEN {
            return Feed::Terminate;
        }

        Feed::Record(AccountBalance {
            location: line.field(&LOCATION),
            id: line.field(&ID),
            account_type: line.char_at(TYPE),
            tax_authority: line.field(&TAX_AUTHORITY),
            price_level: line.char_at(PRICE_LEVEL),
            payment_code: line.field(&PAYMENT_CODE),
            name: line.field(&NAME),
            phone_number: line.field(&PHONE),
            credit_limit: line.field(&CREDIT_LIMIT),
            balance: line.field(&BALANCE),
            balance_credit: line.field(&BALANCE_CREDIT),
            ytd_sales: line.field(&YTD_SALES),
            ytd_sales_credit: line.field(&YTD_SALES_CREDIT),
            ytd_finance_charges: line.field(&YTD_FINANCE_CHARGES),
            date_account_setup: line.field(&DATE_SETUP),
            date_last_payment: line.field(&DATE_LAST_PAYMENT),
            date_last_purchase: line.field(&DATE_LAST_PURCHASE),
        })
    }
}

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

pub const ADDRESS_HEADER_LINES: usize = 7;
pub const ADDRESSES_PER_PAGE: u32 = 25;

pub mod address_layout {
    use crate::field::Column;

    // First line.
    pub const ID: Column = Column::new("id", 0, 9);
    pub const TYPE: usize = 10;
    pub const TAX_AUTHORITY: Column = Column::new("tax_authority", 12, 4);
    pub const PRICE_LEVEL: usize = 17;
    pub const PAYMENT_CODE: Column = Column::new("payment_code", 19, 2);
    pub const NAME: Column = Column::new("name", 22, 27);
    pub const PHONE: Column = Column::new("phone", 118, 17);

    // Second line.
    pub const LINE_1: Column = Column::new("address_1", 23, 27);
    pub const LINE_2: Column = Column::new("address_2", 51, 27);
    pub const CITY: Column = Column::new("city", 79, 17);
    pub const PROVINCE: Column = Column::new("province", 100, 2);
    pub const POSTAL_CODE: Column = Column::new("postal_code", 103, 10);
    pub const FAX: Column = Column::new("fax", 118, 14);

    /// Phone and fax are only read from lines longer than this.
    pub const PHONE_FAX_MIN_LEN: usize = 128;
}

pub fn address_paginator() -> Paginator {
    Paginator::every(ADDRESSES_PER_PAGE, ADDRESS_HEADER_LINES)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub line_1: String,
    pub line_2: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerAddress {
    pub id: String,
    pub account_type: char,
    pub tax_authority: String,
    pub price_level: char,
    pub payment_code: String,
    /// Name exactly as printed, before the `;` split.
    pub original_name: String,
    pub first_name: String,
    pub last_name_or_company_name: String,
    pub phone_number: String,
    pub fax_number: String,
    pub address: Address,
}

impl CustomerAddress {
    /// Split `FIRST;LAST` names; a name without `;` is all last name.
    fn set_name(&mut self, name: String) {
        match name.split_once(';') {
            Some((first, last)) => {
                self.first_name = first.trim().to_string();
                self.last_name_or_company_name = last.trim().to_string();
            }
            None => {
                self.first_name.clear();
                self.last_name_or_company_name.clone_from(&name);
            }
        }
        self.original_name = name;
    }
}

fn or_exchange(number: &str) -> &str {
    if number.is_empty() { EXCHANGE_PREFIX } else { number }
}

impl ReportRecord for CustomerAddress {
    const HEADER: &'static str = "Cust ID|First Name|Last Name or Company Name|Address1|Address2|City|Prov|Postal Cd|PhoneNo|FaxNo|Tax Exemption|House Acct";

    fn debug_line(&self) -> String {
        format!(
            "{:>9} {} {:<4} {} {} {:<95} {}\n{:23}{:<27} {:<27} {:<20} {:<2} {:<10} FAX {}",
            self.id,
            self.account_type,
            self.tax_authority,
            self.price_level,
            self.payment_code,
            self.original_name,
            or_exchange(&self.phone_number),
            "",
            self.address.line_1,
            self.address.line_2,
            self.address.city,
            self.address.province,
            self.address.postal_code,
            or_exchange(&self.fax_number),
        )
    }

    fn normalized_line(&self) -> String {
        [
            self.id.as_str(),
            &self.first_name,
            &self.last_name_or_company_name,
            &self.address.line_1,
            &self.address.line_2,
            &self.address.city,
            &self.address.province,
            &self.address.postal_code,
            &self.phone_number,
            &self.fax_number,
            format::tax_exemption(&self.tax_authority),
            format::house_account(self.account_type),
        ]
        .join("|")
    }
}

/// Two lines per account: identity and name, then the postal address.
#[derive(Debug, Default)]
pub struct AddressAssembler {
    current: CustomerAddress,
    second_line: bool,
}

impl RecordAssembler for AddressAssembler {
    type Record = CustomerAddress;

    fn feed(&mut self, line: &Line<'_>) -> Feed<CustomerAddress> {
        use address_layout::*;

        let long = line.len() > PHONE_FAX_MIN_LEN;
        if !self.second_line {
            let account = &mut self.current;
            account.id = line.field(&ID);
            account.account_type = line.char_at(TYPE);
            account.tax_authority = line.field(&TAX_AUTHORITY);
            account.price_level = line.char_at(PRICE_LEVEL);
            account.payment_code = line.field(&PAYMENT_CODE);
            account.set_name(line.field(&NAME));
            if long {
                account.phone_number = line.field(&PHONE);
            }
            self.second_line = true;
            return Feed::NeedMore;
        }

        self.second_line = false;
        let mut account = std::mem::take(&mut self.current);
        account.address = Address {
            line_1: line.field(&LINE_1),
            line_2: line.field(&LINE_2),
            city: line.field(&CITY),
            province: line.field(&PROVINCE),
            postal_code: line.field(&POSTAL_CODE),
        };
        if long {
            account.fax_number = line.field(&FAX);
        }

        if account.id.is_empty() {
            return Feed::Terminate;
        }
        Feed::Record(account)
    }

    fn page_break(&mut self) {
        if self.second_line {
            trace!("address split by page header; dropping first line");
        }
        self.current = CustomerAddress::default();
        self.second_line = false;
    }
}

// ---------------------------------------------------------------------------
// Memos
// ---------------------------------------------------------------------------

pub const MEMO_HEADER_LINES: usize = 6;
pub const MEMOS_PER_PAGE: u32 = 13;
pub const MEMO_LINES: usize = 4;

pub const MEMO_ID: Column = Column::new("id", 1, 9);
pub const MEMO_RUM: Column = Column::new("rum", 23, 25);
pub const MEMO_SUM: Column = Column::rest("sum", 49);

pub fn memo_paginator() -> Paginator {
    Paginator::every(MEMOS_PER_PAGE, MEMO_HEADER_LINES)
}

/// Memo block of one account: four RUM lines and three SUM lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerMemo {
    pub id: String,
    pub rum: [String; MEMO_LINES],
    pub sum: [String; MEMO_LINES - 1],
}

impl ReportRecord for CustomerMemo {
    const HEADER: &'static str = "Cust ID|Memo";

    fn debug_line(&self) -> String {
        let [rum_1, rum_2, rum_3, rum_4] = &self.rum;
        let [sum_1, sum_2, sum_3] = &self.sum;
        format!(
            "{:>10}-00          {rum_1:<25} {sum_1}\n{pad}{rum_2:<25} {sum_2}\n{pad}{rum_3:<25} {sum_3}\n{pad}{rum_4}",
            self.id,
            pad = " ".repeat(23),
        )
    }

    fn normalized_line(&self) -> String {
        let memo: Vec<&str> = self
            .rum
            .iter()
            .chain(self.sum.iter())
            .map(String::as_str)
            .collect();
        format!("{}|{}", self.id, memo.join(" "))
    }
}

#[derive(Debug, Default)]
pub struct MemoAssembler {
    current: CustomerMemo,
    /// Index of the next line within the account block.
    index: usize,
}

impl RecordAssembler for MemoAssembler {
    type Record = CustomerMemo;

    fn feed(&mut self, line: &Line<'_>) -> Feed<CustomerMemo> {
        let memo = &mut self.current;
        if self.index == 0 {
            memo.id = line.field(&MEMO_ID);
        }
        memo.rum[self.index] = line.field(&MEMO_RUM);
        if let Some(sum) = memo.sum.get_mut(self.index) {
            *sum = line.field(&MEMO_SUM);
        }

        self.index += 1;
        if self.index < MEMO_LINES {
            return Feed::NeedMore;
        }
        self.index = 0;
        Feed::Record(std::mem::take(&mut self.current))
    }

    fn page_break(&mut self) {
        self.current = CustomerMemo::default();
        self.index = 0;
    }
}
