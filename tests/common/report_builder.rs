/// Place `fields` at their byte offsets, padding the gaps with spaces.
pub fn layout_line(fields: &[(usize, &str)]) -> String {
    let mut line = Vec::new();
    for &(offset, text) in fields {
        let end = offset + text.len();
        if line.len() < end {
            line.resize(end, b' ');
        }
        line[offset..end].copy_from_slice(text.as_bytes());
    }
    String::from_utf8(line).unwrap()
}

/// Builds report text line by line.
#[derive(Default)]
pub struct ReportBuilder {
    text: String,
    pages: usize,
}

#[allow(dead_code)]
impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, text: &str) -> Self {
        self.text.push_str(text);
        self.text.push('\n');
        self
    }

    pub fn fields(self, fields: &[(usize, &str)]) -> Self {
        let line = layout_line(fields);
        self.line(&line)
    }

    pub fn blank(self) -> Self {
        self.line("")
    }

    /// A header block opened by a zero-length line, `height` lines in all.
    pub fn blank_header(self, height: usize) -> Self {
        self.blank().header_body(height - 1)
    }

    /// A header block whose opener is an ordinary text line.
    pub fn text_header(self, height: usize) -> Self {
        self.header_body(height)
    }

    fn header_body(mut self, lines: usize) -> Self {
        self.pages += 1;
        for n in 1..=lines {
            self.text
                .push_str(&format!("PROFITMASTER PAGE {} HEADER {n}\n", self.pages));
        }
        self
    }

    /// Append text with no trailing newline.
    pub fn tail(mut self, text: &str) -> Self {
        self.text.push_str(text);
        self
    }

    pub fn build(self) -> String {
        self.text
    }
}
