//! Parse Utilities
//!
//! Source locations and located parse errors for translation files.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocation {
    pub url: String,
    pub offset: usize,
    /// Zero based.
    pub line: usize,
    /// Zero based, in chars.
    pub col: usize,
}

impl ParseLocation {
    pub fn new(url: impl Into<String>, offset: usize, line: usize, col: usize) -> Self {
        ParseLocation {
            url: url.into(),
            offset,
            line,
            col,
        }
    }

    /// Compute the location of the byte `offset` inside `content`.
    pub fn at(content: &str, url: &str, offset: usize) -> Self {
        let offset = floor_char_boundary(content, offset.min(content.len()));
        let before = &content[..offset];
        let line = before.matches('\n').count();
        let col = match before.rfind('\n') {
            Some(nl) => before[nl + 1..].chars().count(),
            None => before.chars().count(),
        };
        ParseLocation::new(url, offset, line, col)
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.url, self.line, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSourceSpan {
    pub start: ParseLocation,
    pub end: ParseLocation,
    /// Source text around `start`, split at `start`.
    pub context: (String, String),
}

impl ParseSourceSpan {
    /// Build a span for the byte range `start..end` of `content`, capturing
    /// up to 100 chars or 3 lines of context on each side.
    pub fn from_range(content: &str, url: &str, start: usize, end: usize) -> Self {
        let start_loc = ParseLocation::at(content, url, start);
        let end_loc = ParseLocation::at(content, url, end);
        let context = get_context(content, start_loc.offset, 100, 3);
        ParseSourceSpan {
            start: start_loc,
            end: end_loc,
            context,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub span: ParseSourceSpan,
    pub msg: String,
}

impl ParseError {
    pub fn new(span: ParseSourceSpan, msg: impl Into<String>) -> Self {
        ParseError {
            span,
            msg: msg.into(),
        }
    }

    pub fn contextual_message(&self) -> String {
        let (before, after) = &self.span.context;
        format!("{} (\"{}[ERROR ->]{}\")", self.msg, before, after)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.contextual_message(), self.span.start)
    }
}

fn get_context(content: &str, offset: usize, max_chars: usize, max_lines: usize) -> (String, String) {
    let before: String = {
        let mut chars = Vec::new();
        let mut lines = 0;
        for ch in content[..offset].chars().rev().take(max_chars) {
            if ch == '\n' {
                lines += 1;
                if lines >= max_lines {
                    break;
                }
            }
            chars.push(ch);
        }
        chars.into_iter().rev().collect()
    };

    let after: String = {
        let mut out = String::new();
        let mut lines = 0;
        for ch in content[offset..].chars().take(max_chars) {
            if ch == '\n' {
                lines += 1;
                if lines >= max_lines {
                    break;
                }
            }
            out.push(ch);
        }
        out
    };

    (before, after)
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_zero_based() {
        let content = "<a>\n  <b/>\n</a>";
        let loc = ParseLocation::at(content, "file.xlf", 6);
        assert_eq!(loc.line, 1);
        assert_eq!(loc.col, 2);
        assert_eq!(loc.to_string(), "file.xlf@1:2");
    }

    #[test]
    fn test_error_includes_context_and_location() {
        let content = "<x>\n<y>";
        let span = ParseSourceSpan::from_range(content, "f.xlf", 4, 7);
        assert_eq!(span.end.to_string(), "f.xlf@1:3");
        let error = ParseError::new(span, "Unexpected");
        assert_eq!(
            error.to_string(),
            "Unexpected (\"<x>\n[ERROR ->]<y>\"): f.xlf@1:0"
        );
    }
}
