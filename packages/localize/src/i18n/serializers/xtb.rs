//! XTB Serializer Module
//!
//! XTB (XML Translation Bundle) format writer

use crate::i18n::message::ParsedMessage;
use crate::i18n::serializers::serializer::TranslationSerializer;
use crate::i18n::serializers::xml_helper::{attrs, TagOptions, XmlFile};

pub const TRANSLATIONS_TAG: &str = "translationbundle";
pub const TRANSLATION_TAG: &str = "translation";
pub const PLACEHOLDER_TAG: &str = "ph";

const PREAMBLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE translationbundle [
<!ELEMENT translationbundle (translation)*>
<!ATTLIST translationbundle lang CDATA #REQUIRED>

<!ELEMENT translation (#PCDATA|ph)*>
<!ATTLIST translation id CDATA #REQUIRED>
<!ATTLIST translation desc CDATA #IMPLIED>
<!ATTLIST translation meaning CDATA #IMPLIED>
<!ATTLIST translation xml:space (default|preserve) "default">

<!ELEMENT ph (#PCDATA|ex)*>
<!ATTLIST ph name CDATA #REQUIRED>

<!ELEMENT ex (#PCDATA)>
]>
"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct XtbTranslationSerializer;

impl TranslationSerializer for XtbTranslationSerializer {
    fn render_file(&self, messages: &[ParsedMessage], locale: &str, _is_target: bool) -> String {
        let mut xml = XmlFile::new();
        xml.raw(PREAMBLE);
        xml.start_tag(TRANSLATIONS_TAG, &attrs(&[("lang", Some(locale))]), TagOptions::default());
        for message in messages {
            xml.start_tag(
                TRANSLATION_TAG,
                &attrs(&[
                    ("id", Some(message.id.as_str())),
                    ("desc", Some(message.description.as_str())),
                    ("meaning", Some(message.meaning.as_str())),
                ]),
                TagOptions::preserve_whitespace(true),
            );
            render_message(&mut xml, message);
            xml.end_tag(TRANSLATION_TAG, TagOptions::preserve_whitespace(false));
        }
        xml.end_tag(TRANSLATIONS_TAG, TagOptions::default());
        xml.into_string()
    }
}

fn render_message(xml: &mut XmlFile, message: &ParsedMessage) {
    let mut parts = message.message_parts.iter();
    if let Some(first) = parts.next() {
        xml.text(first);
    }
    for (name, part) in message.placeholder_names.iter().zip(parts) {
        xml.start_tag(
            PLACEHOLDER_TAG,
            &attrs(&[("name", Some(name.as_str()))]),
            TagOptions::self_closing(),
        );
        xml.text(part);
    }
}
