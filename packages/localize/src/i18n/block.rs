//! Block Marker Module
//!
//! Parses the inline metadata blocks found at the front of message parts:
//!
//! ```text
//! $localize`:meaning|description@@custom-id␟legacy-id:source message text`;
//! $localize`Hello, ${title}:title:!`;
//! ```
//!
//! A block in the first message part describes the whole message. A block in
//! any later part names the placeholder of the substitution right before it.

use thiserror::Error;

/// The character used to mark the start and end of a block.
pub const BLOCK_MARKER: char = ':';

/// Separates the meaning from the description.
pub const MEANING_SEPARATOR: char = '|';

/// Separates the custom id from the meaning and description.
pub const ID_SEPARATOR: &str = "@@";

/// Introduces each legacy id.
pub const LEGACY_ID_INDICATOR: char = '\u{241F}';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockParseError {
    #[error("Unterminated $localize metadata block in \"{raw}\".")]
    Unterminated { raw: String },
}

/// A message part split into its optional block and the remaining text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitBlock {
    pub text: String,
    pub block: Option<String>,
}

/// Metadata parsed from the block of the first message part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageMetadata {
    pub text: String,
    pub meaning: Option<String>,
    pub description: Option<String>,
    pub custom_id: Option<String>,
    pub legacy_ids: Vec<String>,
}

/// A later message part with its optional placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderPart {
    pub message_part: String,
    pub placeholder_name: Option<String>,
    pub associated_message_id: Option<String>,
}

/// Find the end of a block, i.e. the first non-escaped marker after the
/// opening one.
///
/// `cooked` has escape sequences processed, `raw` still contains them. The
/// two are walked in lock-step; a backslash in `raw` skips the escaped char.
/// Returns the char index of the closing marker in `cooked`.
pub fn find_end_of_block(cooked: &str, raw: &str) -> Result<usize, BlockParseError> {
    let cooked_chars: Vec<char> = cooked.chars().collect();
    let raw_chars: Vec<char> = raw.chars().collect();

    let mut raw_index = 1;
    for (cooked_index, &ch) in cooked_chars.iter().enumerate().skip(1) {
        if raw_chars.get(raw_index) == Some(&'\\') {
            raw_index += 1;
        } else if ch == BLOCK_MARKER {
            return Ok(cooked_index);
        }
        raw_index += 1;
    }

    Err(BlockParseError::Unterminated {
        raw: raw.to_string(),
    })
}

/// Split a message part into an optional block off the front and the rest of
/// the text.
///
/// A part whose text must start with a literal marker escapes it in the raw
/// form (`\:`), so only an unescaped leading marker opens a block.
pub fn split_block(cooked: &str, raw: &str) -> Result<SplitBlock, BlockParseError> {
    if !raw.starts_with(BLOCK_MARKER) {
        return Ok(SplitBlock {
            text: cooked.to_string(),
            block: None,
        });
    }

    let end_of_block = find_end_of_block(cooked, raw)?;
    let block: String = cooked.chars().skip(1).take(end_of_block - 1).collect();
    let text: String = cooked.chars().skip(end_of_block + 1).collect();
    Ok(SplitBlock {
        text,
        block: Some(block),
    })
}

/// Parse the metadata block of the first message part.
///
/// `meaning|description@@id␟legacy1␟legacy2`, every segment optional. A block
/// without `|` holds only a description.
pub fn parse_metadata(cooked: &str, raw: &str) -> Result<MessageMetadata, BlockParseError> {
    let SplitBlock { text, block } = split_block(cooked, raw)?;
    let Some(block) = block else {
        return Ok(MessageMetadata {
            text,
            ..Default::default()
        });
    };

    let mut segments = block.split(LEGACY_ID_INDICATOR);
    let meaning_desc_and_id = segments.next().unwrap_or_default();
    let legacy_ids: Vec<String> = segments.map(str::to_string).collect();

    let (meaning_and_desc, custom_id) = match meaning_desc_and_id.split_once(ID_SEPARATOR) {
        Some((head, id)) => (head, Some(id.to_string())),
        None => (meaning_desc_and_id, None),
    };

    let (meaning, description) = match meaning_and_desc.split_once(MEANING_SEPARATOR) {
        Some((meaning, description)) => (Some(meaning.to_string()), description.to_string()),
        None => (None, meaning_and_desc.to_string()),
    };

    Ok(MessageMetadata {
        text,
        meaning,
        description: Some(description).filter(|d| !d.is_empty()),
        custom_id,
        legacy_ids,
    })
}

/// Parse the block of a message part that follows a substitution.
///
/// `name@@associatedMessageId`, both optional.
pub fn parse_placeholder(cooked: &str, raw: &str) -> Result<PlaceholderPart, BlockParseError> {
    let SplitBlock { text, block } = split_block(cooked, raw)?;
    let Some(block) = block else {
        return Ok(PlaceholderPart {
            message_part: text,
            ..Default::default()
        });
    };

    let (placeholder_name, associated_message_id) = match block.split_once(ID_SEPARATOR) {
        Some((name, id)) => (name.to_string(), Some(id.to_string())),
        None => (block, None),
    };

    Ok(PlaceholderPart {
        message_part: text,
        placeholder_name: Some(placeholder_name),
        associated_message_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_block() {
        let split = split_block("abc def", "abc def").unwrap();
        assert_eq!(split.text, "abc def");
        assert_eq!(split.block, None);
    }

    #[test]
    fn test_strips_block() {
        let split = split_block(":block:text", ":block:text").unwrap();
        assert_eq!(split.block.as_deref(), Some("block"));
        assert_eq!(split.text, "text");
    }

    #[test]
    fn test_escaped_marker_does_not_end_the_block() {
        let split = split_block(":a:b:c", r":a\:b:c").unwrap();
        assert_eq!(split.block.as_deref(), Some("a:b"));
        assert_eq!(split.text, "c");
    }

    #[test]
    fn test_escaped_leading_marker_is_not_a_block() {
        let split = split_block(":text", r"\:text").unwrap();
        assert_eq!(split.block, None);
        assert_eq!(split.text, ":text");
    }

    #[test]
    fn test_unterminated_block_is_an_error() {
        let err = split_block(":abc", ":abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unterminated $localize metadata block in \":abc\"."
        );
    }

    #[test]
    fn test_empty_block() {
        let split = split_block("::text", "::text").unwrap();
        assert_eq!(split.block.as_deref(), Some(""));
        assert_eq!(split.text, "text");
    }

    #[test]
    fn test_metadata_with_every_segment() {
        let meta = parse_metadata(
            ":site header|An introduction@@intro\u{241F}abc\u{241F}123:It works!",
            ":site header|An introduction@@intro\u{241F}abc\u{241F}123:It works!",
        )
        .unwrap();
        assert_eq!(meta.text, "It works!");
        assert_eq!(meta.meaning.as_deref(), Some("site header"));
        assert_eq!(meta.description.as_deref(), Some("An introduction"));
        assert_eq!(meta.custom_id.as_deref(), Some("intro"));
        assert_eq!(meta.legacy_ids, vec!["abc".to_string(), "123".to_string()]);
    }

    #[test]
    fn test_metadata_without_separator_is_a_description() {
        let meta = parse_metadata(":just a description:Hi", ":just a description:Hi").unwrap();
        assert_eq!(meta.meaning, None);
        assert_eq!(meta.description.as_deref(), Some("just a description"));
    }

    #[test]
    fn test_metadata_with_only_id() {
        let meta = parse_metadata(":@@foo:custom id!", ":@@foo:custom id!").unwrap();
        assert_eq!(meta.custom_id.as_deref(), Some("foo"));
        assert_eq!(meta.description, None);
        assert_eq!(meta.meaning, None);
        assert_eq!(meta.text, "custom id!");
    }

    #[test]
    fn test_placeholder_name_and_associated_id() {
        let part = parse_placeholder(":ICU@@123: items", ":ICU@@123: items").unwrap();
        assert_eq!(part.placeholder_name.as_deref(), Some("ICU"));
        assert_eq!(part.associated_message_id.as_deref(), Some("123"));
        assert_eq!(part.message_part, " items");
    }

    #[test]
    fn test_non_ascii_text_after_block() {
        let split = split_block(":m:Ça marche", ":m:Ça marche").unwrap();
        assert_eq!(split.text, "Ça marche");
    }
}
