//! Statement and Export Rendering
//!
//! Farmer statements go out as fixed-width plain text, the format the
//! cooperative's dot-matrix slips have always used. Layout is therefore
//! all spaces and separator runs. CSV exports live in [`views`].

pub mod views;

pub use views::{bill_statement, payouts_csv, records_csv};

/// Fluent builder for fixed-width plain-text sheets
pub struct SheetBuilder {
    buf: String,
    width: usize,
}

fn text_width(s: &str) -> usize {
    s.chars().count()
}

impl SheetBuilder {
    /// Create a builder with the given sheet width in characters
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width,
        }
    }

    /// Get the configured sheet width
    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Write raw text
    pub fn write(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Write text followed by newline
    pub fn write_line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Write an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    // === Separators ===

    /// Write a line of '=' characters
    pub fn eq_sep(&mut self) -> &mut Self {
        self.write_line(&"=".repeat(self.width))
    }

    /// Write a line of '-' characters
    pub fn dash_sep(&mut self) -> &mut Self {
        self.write_line(&"-".repeat(self.width))
    }

    // === Layout Helpers ===

    /// Write text centered within the sheet width
    pub fn text_center(&mut self, s: &str) -> &mut Self {
        let w = text_width(s);
        if w >= self.width {
            self.write_line(s)
        } else {
            let pad = (self.width - w) / 2;
            self.write(&" ".repeat(pad));
            self.write_line(s)
        }
    }

    /// Write left and right text on the same line
    ///
    /// Left text is left-aligned, right text is right-aligned, with
    /// spaces filling the gap.
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = text_width(left);
        let rw = text_width(right);

        if lw + rw >= self.width {
            // Too long, just print with space
            self.write_line(&format!("{} {}", left, right))
        } else {
            let spaces = self.width - lw - rw;
            self.write(left);
            self.write(&" ".repeat(spaces));
            self.write_line(right)
        }
    }

    /// Write a key-value pair (alias for line_lr)
    pub fn pair(&mut self, key: &str, value: &str) -> &mut Self {
        self.line_lr(key, value)
    }

    // === Build ===

    /// Finalize and return the accumulated sheet
    pub fn finalize(self) -> String {
        self.buf
    }

    /// Get the current buffer as a string reference
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

impl Default for SheetBuilder {
    fn default() -> Self {
        Self::new(48)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line() {
        let mut b = SheetBuilder::new(32);
        b.write_line("Morning collection");
        assert_eq!(b.as_str(), "Morning collection\n");
    }

    #[test]
    fn test_line_lr_pads_to_width() {
        let mut b = SheetBuilder::new(20);
        b.line_lr("Litres", "15.00");
        let line = b.as_str().trim_end_matches('\n');
        assert_eq!(line.len(), 20);
        assert!(line.starts_with("Litres"));
        assert!(line.ends_with("15.00"));
    }

    #[test]
    fn test_line_lr_overflow_falls_back_to_single_space() {
        let mut b = SheetBuilder::new(10);
        b.line_lr("A very long label", "999999.99");
        assert_eq!(b.as_str(), "A very long label 999999.99\n");
    }

    #[test]
    fn test_text_center() {
        let mut b = SheetBuilder::new(10);
        b.text_center("HI");
        assert_eq!(b.as_str(), "    HI\n");
    }

    #[test]
    fn test_separators() {
        let mut b = SheetBuilder::new(10);
        b.eq_sep().dash_sep();
        assert_eq!(b.as_str(), "==========\n----------\n");
    }
}
