#![deny(clippy::all)]

/**
 * locl - localize core
 *
 * Canonical message model, message identity, block-marker parsing and the
 * translation file codecs shared by the `extract` and `convert` commands.
 */

pub mod diagnostics;
pub mod parse_util;

// Message model and codecs
pub mod i18n;

// Re-exports
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use i18n::message::{ParsedMessage, ParsedTranslation, ParsedTranslationBundle};
pub use i18n::serializers::{get_translation_serializer, TranslationFormat, TranslationSerializer};
