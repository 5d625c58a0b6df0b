//! XLIFF2 Parser Module
//!
//! Reads XLIFF 2.0 files.
//! See http://docs.oasis-open.org/xliff/xliff-core/v2.0/os/xliff-core-v2.0-os.html

use crate::diagnostics::Diagnostics;
use crate::i18n::message::{ParsedTranslation, ParsedTranslationBundle};
use crate::i18n::parsers::message_serializer::{
    MessageSerializer, MessageSerializerConfig, PlaceholderConfig, PlaceholderContainerConfig,
};
use crate::i18n::parsers::xml_utils::{can_parse_xml, get_attr_or_error, named_children};
use crate::i18n::parsers::{ParseAnalysis, ParseHint, TranslationParseError, TranslationParser};
use indexmap::IndexMap;
use roxmltree::Node;

const SERIALIZER_CONFIG: MessageSerializerConfig = MessageSerializerConfig {
    inline_elements: &["cp", "sc", "ec", "mrk", "sm", "em"],
    placeholder: PlaceholderConfig {
        element_name: "ph",
        name_attribute: "equiv",
    },
    placeholder_container: Some(PlaceholderContainerConfig {
        element_name: "pc",
        start_attribute: "equivStart",
        end_attribute: "equivEnd",
    }),
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Xliff2TranslationParser;

impl TranslationParser for Xliff2TranslationParser {
    fn name(&self) -> &'static str {
        "xliff2"
    }

    fn analyze<'a>(&self, file_path: &str, contents: &'a str) -> ParseAnalysis<'a> {
        can_parse_xml(file_path, contents, "xliff", &[("version", "2.0")])
    }

    fn parse<'a>(
        &self,
        file_path: &str,
        contents: &'a str,
        hint: Option<ParseHint<'a>>,
    ) -> Result<ParsedTranslationBundle, TranslationParseError> {
        let hint = match hint {
            Some(hint) => Some(hint),
            None => self.analyze(file_path, contents).hint,
        };
        let Some(ParseHint::Xml(document)) = hint else {
            return Err(TranslationParseError::Invalid(format!(
                "Unable to parse \"{}\" as XLIFF 2.0 format.",
                file_path
            )));
        };

        let root = document.root_element();
        let mut visitor = Xliff2TranslationVisitor {
            url: file_path,
            contents,
            translations: IndexMap::new(),
            sources: IndexMap::new(),
        };
        visitor.visit(root, None)?;

        Ok(ParsedTranslationBundle {
            locale: root.attribute("trgLang").map(str::to_string),
            translations: visitor.translations,
            sources: Some(visitor.sources).filter(|s| !s.is_empty()),
            diagnostics: Diagnostics::new(),
        })
    }
}

struct Xliff2TranslationVisitor<'a> {
    url: &'a str,
    contents: &'a str,
    translations: IndexMap<String, ParsedTranslation>,
    sources: IndexMap<String, ParsedTranslation>,
}

impl<'a> Xliff2TranslationVisitor<'a> {
    /// `unit` is the id of the enclosing `<unit>`, if any.
    fn visit(&mut self, node: Node<'_, '_>, unit: Option<&str>) -> Result<(), TranslationParseError> {
        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "unit" => {
                    let id = get_attr_or_error(child, "id", self.url, self.contents)?;
                    if self.translations.contains_key(id) {
                        return Err(TranslationParseError::at(
                            child,
                            self.url,
                            self.contents,
                            format!("Duplicated translations for message \"{}\"", id),
                        ));
                    }
                    self.visit(child, Some(id))?;
                }
                "segment" => self.visit_segment(child, unit)?,
                _ => self.visit(child, unit)?,
            }
        }
        Ok(())
    }

    fn visit_segment(&mut self, segment: Node<'_, '_>, unit: Option<&str>) -> Result<(), TranslationParseError> {
        let Some(unit) = unit else {
            return Err(TranslationParseError::at(
                segment,
                self.url,
                self.contents,
                "Invalid <segment> element: should be a child of a <unit> element.",
            ));
        };

        let serializer = MessageSerializer::new(&SERIALIZER_CONFIG, self.url, self.contents);
        let Some(target) = named_children(segment, "target").next() else {
            return Err(TranslationParseError::at(
                segment,
                self.url,
                self.contents,
                "Missing required <target> element",
            ));
        };
        if let Some(source) = named_children(segment, "source").next() {
            self.sources.insert(unit.to_string(), serializer.serialize(source)?);
        }
        self.translations.insert(unit.to_string(), serializer.serialize(target)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<ParsedTranslationBundle, TranslationParseError> {
        Xliff2TranslationParser.parse("messages.fr.xlf", contents, None)
    }

    #[test]
    fn test_reads_units() {
        let bundle = parse(
            r#"<xliff version="2.0" xmlns="urn:oasis:names:tc:xliff:document:2.0" srcLang="en" trgLang="fr">
  <file>
    <unit id="1">
      <segment>
        <source>Hello <ph id="1" equiv="PH" disp="name"/></source>
        <target>Bonjour <ph id="1" equiv="PH" disp="name"/></target>
      </segment>
    </unit>
  </file>
</xliff>"#,
        )
        .unwrap();
        assert_eq!(bundle.locale.as_deref(), Some("fr"));
        assert_eq!(bundle.translations["1"].text(), "Bonjour {$PH}");
        assert_eq!(bundle.sources.unwrap()["1"].text(), "Hello {$PH}");
    }

    #[test]
    fn test_reads_placeholder_containers() {
        let bundle = parse(
            r#"<xliff version="2.0" trgLang="fr"><file><unit id="b"><segment><target>x <pc id="0" equivStart="START_BOLD" equivEnd="CLOSE_BOLD">gras</pc></target></segment></unit></file></xliff>"#,
        )
        .unwrap();
        let translation = &bundle.translations["b"];
        assert_eq!(translation.message_parts, vec!["x ", "gras", ""]);
        assert_eq!(translation.placeholder_names, vec!["START_BOLD", "CLOSE_BOLD"]);
    }

    #[test]
    fn test_segment_requires_target() {
        let error = parse(
            r#"<xliff version="2.0"><file><unit id="a"><segment><source>x</source></segment></unit></file></xliff>"#,
        )
        .unwrap_err();
        assert_eq!(error.message(), "Missing required <target> element");
    }

    #[test]
    fn test_segment_outside_unit_is_an_error() {
        let error = parse(
            r#"<xliff version="2.0"><file><segment><target>x</target></segment></file></xliff>"#,
        )
        .unwrap_err();
        assert_eq!(
            error.message(),
            "Invalid <segment> element: should be a child of a <unit> element."
        );
    }

    #[test]
    fn test_duplicate_units_are_an_error() {
        let error = parse(
            r#"<xliff version="2.0"><file>
<unit id="a"><segment><target>1</target></segment></unit>
<unit id="a"><segment><target>2</target></segment></unit>
</file></xliff>"#,
        )
        .unwrap_err();
        assert_eq!(error.message(), "Duplicated translations for message \"a\"");
    }
}
