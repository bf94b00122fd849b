//! Output modes and the derived-value rules shared by the normalized rows.

/// How assembled records are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Pipe-delimited rows for the point-of-sale import.
    #[default]
    Normalized,
    /// Fixed-column reconstruction of the source report, for checking the
    /// parse against the original by eye or by diff.
    Debug,
}

impl OutputMode {
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug { Self::Debug } else { Self::Normalized }
    }
}

/// A fully assembled logical record.
pub trait ReportRecord {
    /// Column header written once before the first normalized row.
    const HEADER: &'static str;

    /// Reconstruction of the source layout. May span several lines.
    fn debug_line(&self) -> String;

    fn normalized_line(&self) -> String;

    fn render(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Normalized => self.normalized_line(),
            OutputMode::Debug => self.debug_line(),
        }
    }
}

/// Tax exemption label for a tax authority code.
pub fn tax_exemption(authority: &str) -> &'static str {
    match authority {
        "EXEM" => "Exempt",
        "ONFN" => "GST",
        _ => "Tax",
    }
}

/// House account flag for an account type character.
pub fn house_account(account_type: char) -> &'static str {
    if account_type == 'O' { "Yes" } else { "No" }
}

/// A credit limit, with an absent limit written as `0`.
pub fn credit_limit(limit: &str) -> &str {
    if limit.is_empty() { "0" } else { limit }
}

/// A balance with its `CR` marker folded into a leading minus sign.
///
/// The report prints a zero balance as `.00`, which collapses to `0`.
pub fn signed_balance(balance: &str, credit_marker: &str) -> String {
    let sign = if credit_marker.starts_with("CR") { "-" } else { "" };
    let amount = if balance.starts_with(".00") { "0" } else { balance };
    format!("{sign}{amount}")
}
