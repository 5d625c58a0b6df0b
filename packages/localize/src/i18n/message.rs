//! Message Module
//!
//! The format independent message model: messages found in source code,
//! translations read from translation files and the bundle that groups them.

use crate::diagnostics::Diagnostics;
use crate::i18n::block::{parse_metadata, parse_placeholder, BlockParseError, BLOCK_MARKER};
use crate::i18n::digest::compute_msg_id;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\$([^}]*)\}").expect("valid placeholder pattern"));

/// The literal strings of a tagged template, with and without escapes
/// processed, plus the source text of each substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateParts {
    pub cooked: Vec<String>,
    pub raw: Vec<String>,
    pub substitutions: Vec<String>,
}

impl TemplateParts {
    pub fn new(cooked: Vec<String>, raw: Vec<String>, substitutions: Vec<String>) -> Self {
        TemplateParts {
            cooked,
            raw,
            substitutions,
        }
    }

    /// Parts without escapes, where raw and cooked forms are the same.
    pub fn from_cooked(cooked: Vec<String>) -> Self {
        let raw = cooked.clone();
        TemplateParts {
            cooked,
            raw,
            substitutions: Vec::new(),
        }
    }
}

/// A message ready to be written to a translation file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMessage {
    /// Effective id: the custom id if one was given, else the digest.
    pub id: String,
    pub custom_id: Option<String>,
    /// Alternative ids this message is also known by; never contains `id`.
    pub legacy_ids: Vec<String>,
    /// Canonical interchange string, placeholders rendered as `{$NAME}`.
    pub text: String,
    pub meaning: String,
    pub description: String,
    /// Literal fragments; one more than there are placeholders.
    pub message_parts: Vec<String>,
    pub placeholder_names: Vec<String>,
    /// Source text of the substitution behind each placeholder, if known.
    pub substitutions: Vec<String>,
}

/// The content of a message in one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTranslation {
    pub message_parts: Vec<String>,
    pub raw_message_parts: Vec<String>,
    pub placeholder_names: Vec<String>,
    pub description: Option<String>,
    pub meaning: Option<String>,
}

impl ParsedTranslation {
    /// The translation text with placeholders rendered as `{$NAME}`.
    pub fn text(&self) -> String {
        let mut text = self.message_parts.first().cloned().unwrap_or_default();
        for (name, part) in self.placeholder_names.iter().zip(self.message_parts.iter().skip(1)) {
            text.push_str("{$");
            text.push_str(name);
            text.push('}');
            text.push_str(part);
        }
        text
    }
}

/// The contents of one parsed translation file.
#[derive(Debug, Clone, Default)]
pub struct ParsedTranslationBundle {
    /// Absent when the file does not name its locale.
    pub locale: Option<String>,
    pub translations: IndexMap<String, ParsedTranslation>,
    /// Source text, for formats that carry it next to the target.
    pub sources: Option<IndexMap<String, ParsedTranslation>>,
    pub diagnostics: Diagnostics,
}

/// Build a translation from literal parts that contain no escapes.
pub fn make_parsed_translation(
    message_parts: Vec<String>,
    placeholder_names: Vec<String>,
    description: Option<String>,
    meaning: Option<String>,
) -> ParsedTranslation {
    ParsedTranslation {
        raw_message_parts: escape_raw_parts(&message_parts),
        message_parts,
        placeholder_names,
        description,
        meaning,
    }
}

/// Split a `{$NAME}` message string into a translation.
pub fn parse_translation(message_string: &str) -> ParsedTranslation {
    let mut message_parts = Vec::new();
    let mut placeholder_names = Vec::new();
    let mut last = 0;
    for captures in PLACEHOLDER_TOKEN.captures_iter(message_string) {
        let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        message_parts.push(message_string[last..whole.start()].to_string());
        placeholder_names.push(name.as_str().to_string());
        last = whole.end();
    }
    message_parts.push(message_string[last..].to_string());

    make_parsed_translation(message_parts, placeholder_names, None, None)
}

/// Raw form of literal parts: a leading block marker is escaped so that it
/// is never read as a placeholder name block.
fn escape_raw_parts(parts: &[String]) -> Vec<String> {
    parts
        .iter()
        .map(|part| {
            if part.starts_with(BLOCK_MARKER) {
                format!("\\{}", part)
            } else {
                part.clone()
            }
        })
        .collect()
}

/// Positional placeholder name for the substitution before part `index`.
pub fn compute_placeholder_name(index: usize) -> String {
    if index == 1 {
        "PH".to_string()
    } else {
        format!("PH_{}", index - 1)
    }
}

/// Parse the literal parts of a tagged template into a message, computing
/// its id.
pub fn parse_message(parts: &TemplateParts) -> Result<ParsedMessage, BlockParseError> {
    let first_cooked = parts.cooked.first().map(String::as_str).unwrap_or_default();
    let first_raw = parts.raw.first().map(String::as_str).unwrap_or(first_cooked);
    let metadata = parse_metadata(first_cooked, first_raw)?;

    let mut message_string = metadata.text.clone();
    let mut message_parts = vec![metadata.text];
    let mut placeholder_names = Vec::new();

    for i in 1..parts.cooked.len() {
        let cooked = &parts.cooked[i];
        let raw = parts.raw.get(i).unwrap_or(cooked);
        let placeholder = parse_placeholder(cooked, raw)?;
        let name = placeholder
            .placeholder_name
            .unwrap_or_else(|| compute_placeholder_name(i));
        message_string.push_str(&format!("{{${}}}{}", name, placeholder.message_part));
        placeholder_names.push(name);
        message_parts.push(placeholder.message_part);
    }

    let meaning = metadata.meaning.unwrap_or_default();
    let computed_id = compute_msg_id(&message_string, &meaning);
    let id = metadata.custom_id.clone().unwrap_or_else(|| computed_id.clone());

    let mut legacy_ids: Vec<String> = metadata
        .legacy_ids
        .into_iter()
        .filter(|legacy| *legacy != id)
        .collect();
    if metadata.custom_id.is_some() && computed_id != id && !legacy_ids.contains(&computed_id) {
        legacy_ids.push(computed_id);
    }

    Ok(ParsedMessage {
        id,
        custom_id: metadata.custom_id,
        legacy_ids,
        text: message_string,
        meaning,
        description: metadata.description.unwrap_or_default(),
        message_parts,
        placeholder_names,
        substitutions: parts.substitutions.clone(),
    })
}

/// Turn a translation read from a file back into a message with the given id.
///
/// Parts are taken as literal text. Placeholder names come from the
/// translation, falling back to positional names when one is missing.
pub fn translation_to_message(message_id: &str, translation: &ParsedTranslation) -> ParsedMessage {
    let message_parts = if translation.message_parts.is_empty() {
        vec![String::new()]
    } else {
        translation.message_parts.clone()
    };
    let placeholder_names: Vec<String> = (1..message_parts.len())
        .map(|i| {
            translation
                .placeholder_names
                .get(i - 1)
                .cloned()
                .unwrap_or_else(|| compute_placeholder_name(i))
        })
        .collect();

    let mut message_string = message_parts[0].clone();
    for (name, part) in placeholder_names.iter().zip(message_parts.iter().skip(1)) {
        message_string.push_str(&format!("{{${}}}{}", name, part));
    }

    ParsedMessage {
        id: message_id.to_string(),
        custom_id: None,
        legacy_ids: Vec::new(),
        text: message_string,
        meaning: translation.meaning.clone().unwrap_or_default(),
        description: translation.description.clone().unwrap_or_default(),
        message_parts,
        placeholder_names,
        substitutions: Vec::new(),
    }
}
