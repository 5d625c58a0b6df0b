//! JSON Serializer Module
//!
//! `{ "locale": "fr", "translations": { "<id>": "text {$PH}" } }`

use crate::i18n::message::ParsedMessage;
use crate::i18n::serializers::serializer::TranslationSerializer;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SimpleJsonTranslationFile<'a> {
    locale: &'a str,
    translations: IndexMap<&'a str, &'a str>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTranslationSerializer;

impl TranslationSerializer for JsonTranslationSerializer {
    fn render_file(&self, messages: &[ParsedMessage], locale: &str, _is_target: bool) -> String {
        let file = SimpleJsonTranslationFile {
            locale,
            translations: messages
                .iter()
                .map(|message| (message.id.as_str(), message.text.as_str()))
                .collect(),
        };
        // A map of strings always serializes.
        serde_json::to_string_pretty(&file).unwrap_or_default()
    }
}
