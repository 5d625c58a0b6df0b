//! XMB Serializer Module
//!
//! XMB (XML Message Bundle) format writer. XMB is a source catalog, it has
//! no slot for a target locale.

use crate::i18n::message::ParsedMessage;
use crate::i18n::serializers::serializer::TranslationSerializer;
use crate::i18n::serializers::xml_helper::{attrs, TagOptions, XmlFile};

const MESSAGES_TAG: &str = "messagebundle";
const MESSAGE_TAG: &str = "msg";
const PLACEHOLDER_TAG: &str = "ph";

const DOCTYPE: &str = r#"<!ELEMENT messagebundle (msg)*>
<!ATTLIST messagebundle class CDATA #IMPLIED>

<!ELEMENT msg (#PCDATA|ph|source)*>
<!ATTLIST msg id CDATA #IMPLIED>
<!ATTLIST msg seq CDATA #IMPLIED>
<!ATTLIST msg name CDATA #IMPLIED>
<!ATTLIST msg desc CDATA #IMPLIED>
<!ATTLIST msg meaning CDATA #IMPLIED>
<!ATTLIST msg obsolete (obsolete) #IMPLIED>
<!ATTLIST msg xml:space (default|preserve) "default">
<!ATTLIST msg is_hidden CDATA #IMPLIED>

<!ELEMENT source (#PCDATA)>

<!ELEMENT ph (#PCDATA|ex)*>
<!ATTLIST ph name CDATA #REQUIRED>

<!ELEMENT ex (#PCDATA)>"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct XmbTranslationSerializer;

impl TranslationSerializer for XmbTranslationSerializer {
    fn render_file(&self, messages: &[ParsedMessage], _locale: &str, _is_target: bool) -> String {
        let mut xml = XmlFile::new();
        xml.raw("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n");
        xml.raw(&format!("<!DOCTYPE {} [\n{}\n]>\n", MESSAGES_TAG, DOCTYPE));
        xml.start_tag(MESSAGES_TAG, &attrs(&[]), TagOptions::default());
        for message in messages {
            xml.start_tag(
                MESSAGE_TAG,
                &attrs(&[
                    ("id", Some(message.id.as_str())),
                    ("desc", Some(message.description.as_str())),
                    ("meaning", Some(message.meaning.as_str())),
                ]),
                TagOptions::preserve_whitespace(true),
            );
            render_message(&mut xml, message);
            xml.end_tag(MESSAGE_TAG, TagOptions::preserve_whitespace(false));
        }
        xml.end_tag(MESSAGES_TAG, TagOptions::default());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_messages_after_doctype() {
        let message = ParsedMessage {
            id: "42".into(),
            meaning: "greeting".into(),
            message_parts: vec!["Hello ".into(), "".into()],
            placeholder_names: vec!["PH".into()],
            ..Default::default()
        };
        let output = XmbTranslationSerializer.render_file(&[message], "en", false);
        assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<!DOCTYPE messagebundle [\n"));
        assert!(output.ends_with(concat!(
            "]>\n",
            "<messagebundle>\n",
            "  <msg id=\"42\" meaning=\"greeting\">Hello <ph name=\"PH\"/></msg>\n",
            "</messagebundle>\n",
        )));
    }
}
