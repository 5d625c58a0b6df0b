//! XML Utilities
//!
//! Shared analysis and attribute helpers for the XML translation parsers.

use crate::diagnostics::Diagnostics;
use crate::i18n::parsers::{ParseAnalysis, ParseHint, TranslationParseError};
use roxmltree::{Document, Node, ParsingOptions};

/// Parse `contents` as XML. Translation files may carry a DOCTYPE.
pub fn parse_xml(contents: &str) -> Result<Document<'_>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(contents, options)
}

/// Check whether `contents` is an XML document with a root element named
/// `root_name` that carries every attribute of `attributes` with the given
/// value.
///
/// On success the parsed document is handed back as the hint, so `parse`
/// does not need to read the file again.
pub fn can_parse_xml<'a>(
    file_path: &str,
    contents: &'a str,
    root_name: &str,
    attributes: &[(&str, &str)],
) -> ParseAnalysis<'a> {
    let mut diagnostics = Diagnostics::new();

    let document = match parse_xml(contents) {
        Ok(document) => document,
        Err(error) => {
            diagnostics.warn(format!("{}: {}", error, file_path));
            return ParseAnalysis::rejected(diagnostics);
        }
    };

    let root = document.root_element();
    if root.tag_name().name() != root_name {
        diagnostics.warn(format!(
            "The XML file does not contain a <{}> root node.",
            root_name
        ));
        return ParseAnalysis::rejected(diagnostics);
    }

    for (attr_name, expected) in attributes {
        if root.attribute(*attr_name) != Some(*expected) {
            diagnostics.warn(format!(
                "The <{}> node does not have the required attribute: {}=\"{}\".",
                root_name, attr_name, expected
            ));
            return ParseAnalysis::rejected(diagnostics);
        }
    }

    ParseAnalysis {
        can_parse: true,
        diagnostics,
        hint: Some(ParseHint::Xml(document)),
    }
}

/// Read an attribute, failing with a located error when it is missing.
pub fn get_attr_or_error<'a>(
    element: Node<'a, '_>,
    attr_name: &str,
    url: &str,
    contents: &str,
) -> Result<&'a str, TranslationParseError> {
    element.attribute(attr_name).ok_or_else(|| {
        TranslationParseError::at(
            element,
            url,
            contents,
            format!(
                "Missing required \"{}\" attribute on <{}> element.",
                attr_name,
                element.tag_name().name()
            ),
        )
    })
}

/// Element children of `node` named `name`.
pub fn named_children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}

/// Text content of an element, all of its text descendants joined.
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_matching_root() {
        let analysis = can_parse_xml(
            "a.xlf",
            r#"<xliff version="1.2"><file/></xliff>"#,
            "xliff",
            &[("version", "1.2")],
        );
        assert!(analysis.can_parse);
        assert!(matches!(analysis.hint, Some(ParseHint::Xml(_))));
    }

    #[test]
    fn test_rejects_wrong_version() {
        let analysis = can_parse_xml(
            "a.xlf",
            r#"<xliff version="2.0"/>"#,
            "xliff",
            &[("version", "1.2")],
        );
        assert!(!analysis.can_parse);
        assert_eq!(
            analysis.diagnostics.messages()[0].message,
            "The <xliff> node does not have the required attribute: version=\"1.2\"."
        );
    }

    #[test]
    fn test_rejects_non_xml() {
        let analysis = can_parse_xml("a.json", "{}", "xliff", &[]);
        assert!(!analysis.can_parse);
        assert!(!analysis.diagnostics.is_empty());
    }

    #[test]
    fn test_allows_doctype() {
        let contents = "<?xml version=\"1.0\"?>\n<!DOCTYPE translationbundle [\n<!ELEMENT translationbundle (translation)*>\n]>\n<translationbundle lang=\"fr\"/>";
        assert!(can_parse_xml("a.xtb", contents, "translationbundle", &[]).can_parse);
    }
}
