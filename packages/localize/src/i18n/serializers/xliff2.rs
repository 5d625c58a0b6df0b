//! XLIFF2 Serializer Module
//!
//! XLIFF 2.0 format writer
//! See https://docs.oasis-open.org/xliff/xliff-core/v2.0/os/xliff-core-v2.0-os.html

use crate::i18n::message::ParsedMessage;
use crate::i18n::serializers::serializer::TranslationSerializer;
use crate::i18n::serializers::xml_helper::{attrs, TagOptions, XmlFile};

pub const VERSION: &str = "2.0";
pub const XMLNS: &str = "urn:oasis:names:tc:xliff:document:2.0";
const PLACEHOLDER_TAG: &str = "ph";
const FILE_TAG: &str = "file";
const UNIT_TAG: &str = "unit";
const SEGMENT_TAG: &str = "segment";
const SOURCE_TAG: &str = "source";
const TARGET_TAG: &str = "target";

#[derive(Debug, Clone, Copy, Default)]
pub struct Xliff2TranslationSerializer;

impl TranslationSerializer for Xliff2TranslationSerializer {
    fn render_file(&self, messages: &[ParsedMessage], locale: &str, is_target: bool) -> String {
        let mut xml = XmlFile::new();
        xml.start_tag(
            "xliff",
            &attrs(&[
                ("version", Some(VERSION)),
                ("xmlns", Some(XMLNS)),
                ("srcLang", Some(locale)),
                ("trgLang", Some(locale)),
            ]),
            TagOptions::default(),
        );
        xml.start_tag(FILE_TAG, &attrs(&[]), TagOptions::default());

        for message in messages {
            xml.start_tag(UNIT_TAG, &attrs(&[("id", Some(message.id.as_str()))]), TagOptions::default());
            xml.start_tag(SEGMENT_TAG, &attrs(&[]), TagOptions::default());
            if !is_target {
                render_message_tag(&mut xml, SOURCE_TAG, message);
            }
            render_message_tag(&mut xml, TARGET_TAG, message);
            xml.end_tag(SEGMENT_TAG, TagOptions::default());
            xml.end_tag(UNIT_TAG, TagOptions::default());
        }

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

/// Placeholder ids restart at 1 in every `<source>`/`<target>`.
fn render_message(xml: &mut XmlFile, message: &ParsedMessage) {
    let mut parts = message.message_parts.iter();
    if let Some(first) = parts.next() {
        xml.text(first);
    }
    for (index, (name, part)) in message.placeholder_names.iter().zip(parts).enumerate() {
        let id = (index + 1).to_string();
        let disp = message.substitutions.get(index).map(String::as_str);
        xml.start_tag(
            PLACEHOLDER_TAG,
            &attrs(&[("id", Some(id.as_str())), ("equiv", Some(name.as_str())), ("disp", disp)]),
            TagOptions::self_closing(),
        );
        xml.text(part);
    }
}
