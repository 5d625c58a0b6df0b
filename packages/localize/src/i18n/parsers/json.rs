//! JSON Parser Module
//!
//! Reads the simple JSON format:
//!
//! ```json
//! {
//!   "locale": "fr",
//!   "translations": {
//!     "8841459487341224498": "rapport {$PH}"
//!   }
//! }
//! ```

use crate::diagnostics::Diagnostics;
use crate::i18n::message::{parse_translation, ParsedTranslationBundle};
use crate::i18n::parsers::{ParseAnalysis, ParseHint, TranslationParseError, TranslationParser};
use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleJsonTranslationParser;

impl TranslationParser for SimpleJsonTranslationParser {
    fn name(&self) -> &'static str {
        "json"
    }

    fn analyze<'a>(&self, file_path: &str, contents: &'a str) -> ParseAnalysis<'a> {
        let mut diagnostics = Diagnostics::new();
        if Path::new(file_path).extension().and_then(|e| e.to_str()) != Some("json") {
            diagnostics.warn("File does not have .json extension.");
            return ParseAnalysis::rejected(diagnostics);
        }

        let json: Value = match serde_json::from_str(contents) {
            Ok(json) => json,
            Err(_) => {
                diagnostics.warn("File is not valid JSON.");
                return ParseAnalysis::rejected(diagnostics);
            }
        };

        match json.get("locale") {
            None => {
                diagnostics.warn("Required \"locale\" property missing.");
                return ParseAnalysis::rejected(diagnostics);
            }
            Some(locale) if !locale.is_string() => {
                diagnostics.warn("The \"locale\" property is not a string.");
                return ParseAnalysis::rejected(diagnostics);
            }
            Some(_) => {}
        }

        match json.get("translations") {
            None => {
                diagnostics.warn("Required \"translations\" property missing.");
                return ParseAnalysis::rejected(diagnostics);
            }
            Some(translations) if !translations.is_object() => {
                diagnostics.warn("The \"translations\" is not an object.");
                return ParseAnalysis::rejected(diagnostics);
            }
            Some(_) => {}
        }

        ParseAnalysis {
            can_parse: true,
            diagnostics,
            hint: Some(ParseHint::Json(json)),
        }
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
        let Some(ParseHint::Json(json)) = hint else {
            return Err(TranslationParseError::Invalid(format!(
                "Unable to parse \"{}\" as JSON format.",
                file_path
            )));
        };

        let locale = json.get("locale").and_then(Value::as_str).map(str::to_string);
        let mut translations = IndexMap::new();
        if let Some(entries) = json.get("translations").and_then(Value::as_object) {
            for (message_id, target) in entries {
                let Some(target) = target.as_str() else {
                    return Err(TranslationParseError::Invalid(format!(
                        "The translation for message \"{}\" is not a string: {}",
                        message_id, file_path
                    )));
                };
                translations.insert(message_id.clone(), parse_translation(target));
            }
        }

        Ok(ParsedTranslationBundle {
            locale,
            translations,
            sources: None,
            diagnostics: Diagnostics::new(),
        })
    }
}
