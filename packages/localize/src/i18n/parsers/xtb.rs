//! XTB Parser Module
//!
//! Reads XTB (XML Translation Bundle) files.

use crate::diagnostics::Diagnostics;
use crate::i18n::message::{ParsedTranslation, ParsedTranslationBundle};
use crate::i18n::parsers::message_serializer::{
    MessageSerializer, MessageSerializerConfig, PlaceholderConfig,
};
use crate::i18n::parsers::xml_utils::{can_parse_xml, get_attr_or_error, named_children};
use crate::i18n::parsers::{ParseAnalysis, ParseHint, TranslationParseError, TranslationParser};
use crate::i18n::serializers::xtb::{PLACEHOLDER_TAG, TRANSLATIONS_TAG, TRANSLATION_TAG};
use indexmap::IndexMap;
use std::path::Path;

const SERIALIZER_CONFIG: MessageSerializerConfig = MessageSerializerConfig {
    inline_elements: &[],
    placeholder: PlaceholderConfig {
        element_name: PLACEHOLDER_TAG,
        name_attribute: "name",
    },
    placeholder_container: None,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct XtbTranslationParser;

impl TranslationParser for XtbTranslationParser {
    fn name(&self) -> &'static str {
        "xtb"
    }

    fn analyze<'a>(&self, file_path: &str, contents: &'a str) -> ParseAnalysis<'a> {
        let extension = Path::new(file_path).extension().and_then(|e| e.to_str());
        if !matches!(extension, Some("xtb") | Some("xmb")) {
            let mut diagnostics = Diagnostics::new();
            diagnostics.warn("Must have xtb or xmb extension.");
            return ParseAnalysis::rejected(diagnostics);
        }
        can_parse_xml(file_path, contents, TRANSLATIONS_TAG, &[])
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
                "Unable to parse \"{}\" as XTB format.",
                file_path
            )));
        };

        let root = document.root_element();
        let serializer = MessageSerializer::new(&SERIALIZER_CONFIG, file_path, contents);
        let mut translations: IndexMap<String, ParsedTranslation> = IndexMap::new();

        for element in named_children(root, TRANSLATION_TAG) {
            let id = get_attr_or_error(element, "id", file_path, contents)?;
            if translations.contains_key(id) {
                return Err(TranslationParseError::at(
                    element,
                    file_path,
                    contents,
                    format!("Duplicated translations for message \"{}\"", id),
                ));
            }

            let mut translation = serializer.serialize(element)?;
            translation.description = element.attribute("desc").map(str::to_string);
            translation.meaning = element.attribute("meaning").map(str::to_string);
            translations.insert(id.to_string(), translation);
        }

        Ok(ParsedTranslationBundle {
            locale: root.attribute("lang").map(str::to_string),
            translations,
            sources: None,
            diagnostics: Diagnostics::new(),
        })
    }
}
