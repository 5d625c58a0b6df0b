//! XML Helper Module
//!
//! A streaming XML writer used by the XML based translation formats.
//!
//! Elements are written one per line with two space indentation, except
//! inside a preserved-whitespace region (message content), where nothing is
//! added around tags.

use indexmap::IndexMap;

/// Line terminator used between elements.
pub const CR: &str = "\n";

const INDENT_STEP: &str = "  ";

/// Layout switches for [`XmlFile::start_tag`] and [`XmlFile::end_tag`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TagOptions {
    pub self_closing: bool,
    /// When set, changes whether whitespace is added around the tags that
    /// follow this one.
    pub preserve_whitespace: Option<bool>,
}

impl TagOptions {
    pub fn self_closing() -> Self {
        TagOptions {
            self_closing: true,
            preserve_whitespace: None,
        }
    }

    pub fn preserve_whitespace(preserve: bool) -> Self {
        TagOptions {
            self_closing: false,
            preserve_whitespace: Some(preserve),
        }
    }
}

/// Attribute list; entries with an empty or missing value are not written.
pub type Attributes<'a> = IndexMap<&'a str, Option<&'a str>>;

/// Build an [`Attributes`] list from `(name, value)` pairs, in order.
pub fn attrs<'a>(pairs: &[(&'a str, Option<&'a str>)]) -> Attributes<'a> {
    pairs.iter().copied().collect()
}

#[derive(Debug, Default)]
pub struct XmlFile {
    output: String,
    indent: String,
    element_stack: Vec<String>,
    preserve_whitespace: bool,
}

impl XmlFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write raw markup as is, e.g. a declaration or a DOCTYPE.
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.output.push_str(markup);
        self
    }

    pub fn start_tag(&mut self, name: &str, attributes: &Attributes<'_>, options: TagOptions) -> &mut Self {
        if !self.preserve_whitespace {
            self.output.push_str(&self.indent);
        }

        self.output.push('<');
        self.output.push_str(name);
        for (attr_name, value) in attributes {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                self.output.push(' ');
                self.output.push_str(attr_name);
                self.output.push_str("=\"");
                self.output.push_str(&escape_xml(value));
                self.output.push('"');
            }
        }

        if options.self_closing {
            self.output.push_str("/>");
        } else {
            self.output.push('>');
            self.element_stack.push(name.to_string());
            self.increase_indent();
        }

        if let Some(preserve) = options.preserve_whitespace {
            self.preserve_whitespace = preserve;
        }
        if !self.preserve_whitespace {
            self.output.push_str(CR);
        }
        self
    }

    pub fn end_tag(&mut self, name: &str, options: TagOptions) -> &mut Self {
        if let Some(open) = self.element_stack.pop() {
            debug_assert_eq!(open, name, "unexpected closing tag");
        }

        self.decrease_indent();

        if !self.preserve_whitespace {
            self.output.push_str(&self.indent);
        }
        self.output.push_str("</");
        self.output.push_str(name);
        self.output.push('>');

        if let Some(preserve) = options.preserve_whitespace {
            self.preserve_whitespace = preserve;
        }
        if !self.preserve_whitespace {
            self.output.push_str(CR);
        }
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.output.push_str(&escape_xml(text));
        self
    }

    fn increase_indent(&mut self) {
        self.indent.push_str(INDENT_STEP);
    }

    fn decrease_indent(&mut self) {
        let len = self.indent.len().saturating_sub(INDENT_STEP.len());
        self.indent.truncate(len);
    }

    pub fn into_string(self) -> String {
        self.output
    }
}

impl std::fmt::Display for XmlFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.output)
    }
}

/// Escape the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indents_nested_elements() {
        let mut xml = XmlFile::new();
        xml.start_tag("a", &attrs(&[]), TagOptions::default());
        xml.start_tag("b", &attrs(&[("id", Some("1")), ("skip", None), ("empty", Some(""))]), TagOptions::self_closing());
        xml.end_tag("a", TagOptions::default());
        assert_eq!(xml.into_string(), "<a>\n  <b id=\"1\"/>\n</a>\n");
    }

    #[test]
    fn test_preserves_whitespace_inside_content() {
        let mut xml = XmlFile::new();
        xml.start_tag("unit", &attrs(&[]), TagOptions::default());
        xml.start_tag("target", &attrs(&[]), TagOptions::preserve_whitespace(true));
        xml.text("a < b ");
        xml.start_tag("x", &attrs(&[("id", Some("PH"))]), TagOptions::self_closing());
        xml.end_tag("target", TagOptions::preserve_whitespace(false));
        xml.end_tag("unit", TagOptions::default());
        assert_eq!(
            xml.into_string(),
            "<unit>\n  <target>a &lt; b <x id=\"PH\"/></target>\n</unit>\n"
        );
    }

    #[test]
    fn test_escapes_special_characters() {
        assert_eq!(escape_xml(r#"&"'<>"#), "&amp;&quot;&apos;&lt;&gt;");
    }
}
