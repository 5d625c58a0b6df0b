//! XLIFF Serializer Module
//!
//! XLIFF 1.2 format writer
//! See https://docs.oasis-open.org/xliff/v1.2/os/xliff-core.html

use crate::i18n::message::ParsedMessage;
use crate::i18n::serializers::serializer::TranslationSerializer;
use crate::i18n::serializers::xml_helper::{attrs, TagOptions, XmlFile};

pub const VERSION: &str = "1.2";
pub const XMLNS: &str = "urn:oasis:names:tc:xliff:document:1.2";
const PLACEHOLDER_TAG: &str = "x";
const FILE_TAG: &str = "file";
const BODY_TAG: &str = "body";
const UNIT_TAG: &str = "trans-unit";
const SOURCE_TAG: &str = "source";
const TARGET_TAG: &str = "target";
const NOTE_TAG: &str = "note";

#[derive(Debug, Clone, Copy, Default)]
pub struct Xliff1TranslationSerializer;

impl TranslationSerializer for Xliff1TranslationSerializer {
    fn render_file(&self, messages: &[ParsedMessage], locale: &str, is_target: bool) -> String {
        let mut xml = XmlFile::new();
        xml.start_tag(
            "xliff",
            &attrs(&[("version", Some(VERSION)), ("xmlns", Some(XMLNS))]),
            TagOptions::default(),
        );
        let source_language = if is_target { None } else { Some(locale) };
        xml.start_tag(
            FILE_TAG,
            &attrs(&[
                ("source-language", source_language),
                ("target-language", Some(locale)),
                ("datatype", Some("plaintext")),
            ]),
            TagOptions::default(),
        );
        xml.start_tag(BODY_TAG, &attrs(&[]), TagOptions::default());

        for message in messages {
            xml.start_tag(
                UNIT_TAG,
                &attrs(&[("id", Some(message.id.as_str())), ("datatype", Some("html"))]),
                TagOptions::default(),
            );
            if !is_target {
                render_message_tag(&mut xml, SOURCE_TAG, message);
            }
            render_message_tag(&mut xml, TARGET_TAG, message);
            if !message.description.is_empty() {
                render_note(&mut xml, "description", &message.description);
            }
            if !message.meaning.is_empty() {
                render_note(&mut xml, "meaning", &message.meaning);
            }
            xml.end_tag(UNIT_TAG, TagOptions::default());
        }

        xml.end_tag(BODY_TAG, TagOptions::default());
        xml.end_tag(FILE_TAG, TagOptions::default());
        xml.end_tag("xliff", TagOptions::default());
        xml.into_string()
    }
}

fn render_message_tag(xml: &mut XmlFile, tag_name: &str, message: &ParsedMessage) {
    xml.start_tag(tag_name, &attrs(&[]), TagOptions::preserve_whitespace(true));
    render_message(xml, message);
    xml.end_tag(tag_name, TagOptions::preserve_whitespace(false));
}

fn render_message(xml: &mut XmlFile, message: &ParsedMessage) {
    let mut parts = message.message_parts.iter();
    if let Some(first) = parts.next() {
        xml.text(first);
    }
    for (name, part) in message.placeholder_names.iter().zip(parts) {
        xml.start_tag(
            PLACEHOLDER_TAG,
            &attrs(&[("id", Some(name.as_str()))]),
            TagOptions::self_closing(),
        );
        xml.text(part);
    }
}

fn render_note(xml: &mut XmlFile, from: &str, value: &str) {
    xml.start_tag(
        NOTE_TAG,
        &attrs(&[("priority", Some("1")), ("from", Some(from))]),
        TagOptions::preserve_whitespace(true),
    );
    xml.text(value);
    xml.end_tag(NOTE_TAG, TagOptions::preserve_whitespace(false));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ParsedMessage {
        ParsedMessage {
            id: "42".into(),
            text: "Hello {$PH}!".into(),
            message_parts: vec!["Hello ".into(), "!".into()],
            placeholder_names: vec!["PH".into()],
            description: "greeting".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_renders_source_and_target_for_extraction() {
        let output = Xliff1TranslationSerializer.render_file(&[message()], "en", false);
        assert_eq!(
            output,
            concat!(
                "<xliff version=\"1.2\" xmlns=\"urn:oasis:names:tc:xliff:document:1.2\">\n",
                "  <file source-language=\"en\" target-language=\"en\" datatype=\"plaintext\">\n",
                "    <body>\n",
                "      <trans-unit id=\"42\" datatype=\"html\">\n",
                "        <source>Hello <x id=\"PH\"/>!</source>\n",
                "        <target>Hello <x id=\"PH\"/>!</target>\n",
                "        <note priority=\"1\" from=\"description\">greeting</note>\n",
                "      </trans-unit>\n",
                "    </body>\n",
                "  </file>\n",
                "</xliff>\n",
            )
        );
    }

    #[test]
    fn test_target_only_omits_source() {
        let output = Xliff1TranslationSerializer.render_file(&[message()], "fr", true);
        assert!(output.contains("<file target-language=\"fr\" datatype=\"plaintext\">"));
        assert!(!output.contains("<source>"));
    }
}
