//! I18n Module
//!
//! Message model, identity and the translation file codecs.

pub mod block;
pub mod digest;
pub mod message;
pub mod parsers;
pub mod serializers;

// Re-export commonly used items
pub use block::{parse_metadata, parse_placeholder, split_block, BlockParseError, MessageMetadata};
pub use digest::{compute_msg_id, fingerprint};
pub use message::{
    parse_message, parse_translation, translation_to_message, ParsedMessage, ParsedTranslation,
    ParsedTranslationBundle, TemplateParts,
};
pub use parsers::{TranslationLoader, TranslationParseError, TranslationParser};
pub use serializers::{get_translation_serializer, TranslationFormat, TranslationSerializer};
