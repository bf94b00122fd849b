//! Fixed-column field extraction.
//!
//! Report lines are addressed by byte offset, exactly as the legacy report
//! generator laid them out. Extraction never reads past the end of the line
//! it is handed: a window running off the end is clipped, and a window that
//! starts past the end is empty. A short line therefore yields empty fields
//! instead of an error.

/// Whitespace as the C locale's `isspace` sees it.
fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Trim blank bytes from both ends.
///
/// An all-blank slice trims to empty, never to a single blank.
pub fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !is_blank(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| !is_blank(b))
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// The bytes of `line` in `offset..offset + width`, clipped to the line.
pub fn window(line: &[u8], offset: usize, width: usize) -> &[u8] {
    let start = offset.min(line.len());
    let end = offset.saturating_add(width).min(line.len());
    &line[start..end]
}

/// Extract the trimmed text of a fixed column.
///
/// Bytes that are not valid UTF-8 are replaced after the window is cut, so
/// offsets always count raw bytes.
pub fn extract(line: &[u8], offset: usize, width: usize) -> String {
    String::from_utf8_lossy(trim(window(line, offset, width))).into_owned()
}

/// The byte at `offset` as a char, or a space when the line is shorter.
pub fn char_at(line: &[u8], offset: usize) -> char {
    line.get(offset).map_or(' ', |&b| char::from(b))
}

/// Integer conversion with C `atoi` semantics.
///
/// Leading blanks and one sign are accepted, then digits are read up to the
/// first non-digit. Empty or non-numeric text is 0.
pub fn parse_int(text: &str) -> i32 {
    let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |acc, d| {
            acc.saturating_mul(10).saturating_add(i32::from(d - b'0'))
        });
    if negative { -value } else { value }
}

/// One entry of a report's layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
}

impl Column {
    pub const fn new(name: &'static str, offset: usize, width: usize) -> Self {
        Self {
            name,
            offset,
            width,
        }
    }

    /// A column running from `offset` to the end of the line.
    pub const fn rest(name: &'static str, offset: usize) -> Self {
        Self {
            name,
            offset,
            width: usize::MAX,
        }
    }

    pub fn extract(&self, line: &[u8]) -> String {
        extract(line, self.offset, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_blank_window_is_empty_for_every_width() {
        let blanks = " ".repeat(64);
        for width in 1..=64 {
            assert_eq!(extract(blanks.as_bytes(), 0, width), "", "width {width}");
        }
    }

    #[test]
    fn test_single_blank_is_empty_not_space() {
        assert_eq!(extract(b"A B", 1, 1), "");
        assert_eq!(extract(b"\t", 0, 1), "");
    }

    #[test]
    fn test_trims_both_ends() {
        assert_eq!(extract(b"  SMITH  JOHN   |", 0, 15), "SMITH  JOHN");
        assert_eq!(extract(b"          1", 0, 11), "1");
    }

    #[test]
    fn test_trim_is_idempotent() {
        for raw in ["  a b  ", "x", "", "   ", "\tTAB\t", "lead", "trail  "] {
            let once = trim(raw.as_bytes());
            assert_eq!(trim(once), once);
        }
    }

    #[test]
    fn test_window_is_clipped_to_line() {
        let line = b"0123456789";
        assert_eq!(window(line, 8, 5), b"89");
        assert_eq!(window(line, 10, 5), b"");
        assert_eq!(window(line, 42, 5), b"");
        assert_eq!(window(line, 3, usize::MAX), b"3456789");
    }

    #[test]
    fn test_extract_past_end_is_empty() {
        assert_eq!(extract(b"short", 20, 4), "");
    }

    #[test]
    fn test_extract_keeps_byte_offsets_with_invalid_utf8() {
        let line = b"\xe9t\xe9 ABC";
        assert_eq!(extract(line, 4, 3), "ABC");
        assert_eq!(extract(line, 0, 3), "\u{fffd}t\u{fffd}");
    }

    #[test]
    fn test_char_at() {
        assert_eq!(char_at(b"ABC", 1), 'B');
        assert_eq!(char_at(b"ABC", 3), ' ');
    }

    #[test]
    fn test_parse_int_follows_atoi() {
        assert_eq!(parse_int("42"), 42);
        assert_eq!(parse_int("-17"), -17);
        assert_eq!(parse_int("+5"), 5);
        assert_eq!(parse_int("12-"), 12);
        assert_eq!(parse_int("1,234"), 1);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int("-"), 0);
    }

    #[test]
    fn test_parse_int_saturates() {
        assert_eq!(parse_int("99999999999"), i32::MAX);
    }

    #[test]
    fn test_column_rest_reads_to_end() {
        const MEMO: Column = Column::rest("memo", 4);
        assert_eq!(MEMO.extract(b"ID  PAID IN FULL   "), "PAID IN FULL");
    }
}
