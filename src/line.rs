/// A single source line, classified for conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Whitespace only. Closes one level of open context.
    Blank,
    /// Trimmed text starts with the bullet marker
    ListItem(&'a str),
    Paragraph(&'a str),
}

/// Bullet marker for list items
pub const BULLET: char = '*';

impl<'a> Line<'a> {
    /// Classify a raw line. The line keeps its terminator and leading whitespace.
    pub fn classify(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Line::Blank
        } else if trimmed.starts_with(BULLET) {
            Line::ListItem(raw)
        } else {
            Line::Paragraph(raw)
        }
    }
}

/// Block kinds that can be open during conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    List,
}

/// Split text into lines, each keeping its own terminator.
pub fn lines(source: &str) -> impl Iterator<Item = &str> {
    source.split_inclusive('\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines() {
        assert_eq!(Line::classify("\n"), Line::Blank);
        assert_eq!(Line::classify("   \t\n"), Line::Blank);
        assert_eq!(Line::classify(""), Line::Blank);
    }

    #[test]
    fn list_items_keep_indent() {
        assert_eq!(Line::classify("  * nested\n"), Line::ListItem("  * nested\n"));
        assert_eq!(Line::classify("*bold* start\n"), Line::ListItem("*bold* start\n"));
    }

    #[test]
    fn paragraphs() {
        assert_eq!(Line::classify("text\n"), Line::Paragraph("text\n"));
        assert_eq!(Line::classify("- dash\n"), Line::Paragraph("- dash\n"));
    }

    #[test]
    fn split_keeps_terminators() {
        let split: Vec<&str> = lines("a\n\nb").collect();
        assert_eq!(split, vec!["a\n", "\n", "b"]);
        assert_eq!(lines("").count(), 0);
    }
}
