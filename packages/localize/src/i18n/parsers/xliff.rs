//! XLIFF Parser Module
//!
//! Reads XLIFF 1.2 files.
//! See http://docs.oasis-open.org/xliff/v1.2/os/xliff-core.html

use crate::diagnostics::Diagnostics;
use crate::i18n::message::{ParsedTranslation, ParsedTranslationBundle};
use crate::i18n::parsers::message_serializer::{
    MessageSerializer, MessageSerializerConfig, PlaceholderConfig,
};
use crate::i18n::parsers::xml_utils::{can_parse_xml, get_attr_or_error, text_content};
use crate::i18n::parsers::{ParseAnalysis, ParseHint, TranslationParseError, TranslationParser};
use indexmap::IndexMap;
use roxmltree::Node;

const SERIALIZER_CONFIG: MessageSerializerConfig = MessageSerializerConfig {
    inline_elements: &["g", "bx", "ex", "bpt", "ept", "ph", "it", "mrk"],
    placeholder: PlaceholderConfig {
        element_name: "x",
        name_attribute: "id",
    },
    placeholder_container: None,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Xliff1TranslationParser;

impl TranslationParser for Xliff1TranslationParser {
    fn name(&self) -> &'static str {
        "xliff1"
    }

    fn analyze<'a>(&self, file_path: &str, contents: &'a str) -> ParseAnalysis<'a> {
        can_parse_xml(file_path, contents, "xliff", &[("version", "1.2")])
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
                "Unable to parse \"{}\" as XLIFF 1.2 format.",
                file_path
            )));
        };

        let mut visitor = XliffFileVisitor {
            url: file_path,
            contents,
            locale: None,
            translations: IndexMap::new(),
            sources: IndexMap::new(),
        };
        visitor.visit(document.root_element())?;

        Ok(ParsedTranslationBundle {
            locale: visitor.locale,
            translations: visitor.translations,
            sources: Some(visitor.sources).filter(|s| !s.is_empty()),
            diagnostics: Diagnostics::new(),
        })
    }
}

struct XliffFileVisitor<'a> {
    url: &'a str,
    contents: &'a str,
    locale: Option<String>,
    translations: IndexMap<String, ParsedTranslation>,
    sources: IndexMap<String, ParsedTranslation>,
}

impl<'a> XliffFileVisitor<'a> {
    fn visit(&mut self, node: Node<'_, '_>) -> Result<(), TranslationParseError> {
        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "file" => {
                    if self.locale.is_none() {
                        self.locale = child.attribute("target-language").map(str::to_string);
                    }
                    self.visit(child)?;
                }
                "trans-unit" => self.visit_trans_unit(child)?,
                _ => self.visit(child)?,
            }
        }
        Ok(())
    }

    fn visit_trans_unit(&mut self, element: Node<'_, '_>) -> Result<(), TranslationParseError> {
        let id = get_attr_or_error(element, "id", self.url, self.contents)?;
        if self.translations.contains_key(id) {
            return Err(TranslationParseError::at(
                element,
                self.url,
                self.contents,
                format!("Duplicated translations for message \"{}\"", id),
            ));
        }

        let serializer = MessageSerializer::new(&SERIALIZER_CONFIG, self.url, self.contents);
        let mut target = None;
        let mut source = None;
        let mut description = None;
        let mut meaning = None;

        for child in element.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "target" => target = Some(serializer.serialize(child)?),
                "source" => source = Some(serializer.serialize(child)?),
                "note" => {
                    let value = text_content(child);
                    if value.is_empty() {
                        continue;
                    }
                    match child.attribute("from") {
                        Some("description") => description = Some(value),
                        Some("meaning") => meaning = Some(value),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        let Some(mut translation) = target.or_else(|| source.clone()) else {
            return Err(TranslationParseError::at(
                element,
                self.url,
                self.contents,
                "Missing required <target> element",
            ));
        };
        if description.is_some() {
            translation.description = description;
        }
        if meaning.is_some() {
            translation.meaning = meaning;
        }

        if let Some(source) = source {
            self.sources.insert(id.to_string(), source);
        }
        self.translations.insert(id.to_string(), translation);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<ParsedTranslationBundle, TranslationParseError> {
        Xliff1TranslationParser.parse("messages.fr.xlf", contents, None)
    }

    #[test]
    fn test_reads_locale_targets_and_notes() {
        let bundle = parse(
            r#"<xliff version="1.2" xmlns="urn:oasis:names:tc:xliff:document:1.2">
  <file target-language="fr" datatype="plaintext">
    <body>
      <trans-unit id="1" datatype="html">
        <source>Hello <x id="PH"/></source>
        <target>Bonjour <x id="PH"/></target>
        <note priority="1" from="description">greeting</note>
        <note priority="1" from="meaning">hello</note>
      </trans-unit>
    </body>
  </file>
</xliff>"#,
        )
        .unwrap();

        assert_eq!(bundle.locale.as_deref(), Some("fr"));
        let translation = &bundle.translations["1"];
        assert_eq!(translation.message_parts, vec!["Bonjour ", ""]);
        assert_eq!(translation.placeholder_names, vec!["PH"]);
        assert_eq!(translation.description.as_deref(), Some("greeting"));
        assert_eq!(translation.meaning.as_deref(), Some("hello"));
        assert_eq!(bundle.sources.unwrap()["1"].message_parts, vec!["Hello ", ""]);
    }

    #[test]
    fn test_falls_back_to_source() {
        let bundle = parse(
            r#"<xliff version="1.2"><file><body><trans-unit id="a"><source>Hi</source></trans-unit></body></file></xliff>"#,
        )
        .unwrap();
        assert_eq!(bundle.locale, None);
        assert_eq!(bundle.translations["a"].message_parts, vec!["Hi"]);
    }

    #[test]
    fn test_missing_target_is_an_error() {
        let error = parse(
            r#"<xliff version="1.2"><file><body><trans-unit id="a"></trans-unit></body></file></xliff>"#,
        )
        .unwrap_err();
        assert_eq!(error.message(), "Missing required <target> element");
        assert!(error.to_string().contains("messages.fr.xlf@0:"));
    }

    #[test]
    fn test_duplicate_ids_are_an_error() {
        let error = parse(
            r#"<xliff version="1.2"><file><body>
<trans-unit id="a"><target>1</target></trans-unit>
<trans-unit id="a"><target>2</target></trans-unit>
</body></file></xliff>"#,
        )
        .unwrap_err();
        assert_eq!(error.message(), "Duplicated translations for message \"a\"");
        assert!(error.to_string().contains("messages.fr.xlf@2:0"));
    }
}
