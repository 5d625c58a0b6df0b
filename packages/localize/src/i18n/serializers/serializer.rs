//! Serializer Module
//!
//! Base trait for the translation file writers.

use crate::i18n::message::ParsedMessage;

/// Renders a list of messages as the contents of one translation file.
pub trait TranslationSerializer: Send + Sync {
    /// - `locale` is the language the messages are written in.
    /// - `is_target` is set when the messages already are translations: formats
    ///   with separate source and target slots then only write the target.
    fn render_file(&self, messages: &[ParsedMessage], locale: &str, is_target: bool) -> String;
}
