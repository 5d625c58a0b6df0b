//! Message Serializer Module
//!
//! Walks the XML content of a translated message and rebuilds it as a
//! [`ParsedTranslation`]: literal parts interleaved with placeholder names.

use crate::i18n::message::{make_parsed_translation, ParsedTranslation};
use crate::i18n::parsers::TranslationParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use roxmltree::Node;

/// The start of an ICU expansion, right after its opening brace:
/// `count, plural,` / `gender, select,` / `rank, selectordinal,`.
static ICU_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[^\s,{}]+\s*,\s*(plural|select|selectordinal)\s*,")
        .expect("valid icu start pattern")
});

/// The element that stands for a single placeholder.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderConfig {
    pub element_name: &'static str,
    pub name_attribute: &'static str,
}

/// The element that wraps content between an opening and a closing placeholder.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderContainerConfig {
    pub element_name: &'static str,
    pub start_attribute: &'static str,
    pub end_attribute: &'static str,
}

/// What the elements of one format mean inside message content.
#[derive(Debug, Clone, Copy)]
pub struct MessageSerializerConfig {
    /// Elements whose children are read as if the element were not there.
    pub inline_elements: &'static [&'static str],
    pub placeholder: PlaceholderConfig,
    pub placeholder_container: Option<PlaceholderContainerConfig>,
}

/// Collects parts and placeholder names while a message is walked.
///
/// Placeholders found inside an ICU expression stay in the text as
/// `{NAME}` since ICU cases are not split into separate parts. Only braces
/// that open an ICU expansion, and the case braces nested in one, count; any
/// other brace is literal text.
#[derive(Debug, Default)]
pub struct TargetMessageRenderer {
    message_parts: Vec<String>,
    placeholder_names: Vec<String>,
    text: String,
    icu_depth: usize,
}

impl TargetMessageRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text, tracking ICU braces.
    pub fn text(&mut self, text: &str) {
        for (index, ch) in text.char_indices() {
            match ch {
                '{' if self.icu_depth > 0 || ICU_START.is_match(&text[index + 1..]) => {
                    self.icu_depth += 1;
                }
                '}' if self.icu_depth > 0 => self.icu_depth -= 1,
                _ => {}
            }
        }
        self.text.push_str(text);
    }

    /// Whether an ICU expansion was opened and not closed yet.
    pub fn in_icu(&self) -> bool {
        self.icu_depth > 0
    }

    pub fn placeholder(&mut self, name: &str) {
        let name = normalize_placeholder_name(name);
        if self.icu_depth > 0 {
            self.text.push('{');
            self.text.push_str(&name);
            self.text.push('}');
        } else {
            self.store_message_part();
            self.placeholder_names.push(name);
        }
    }

    fn store_message_part(&mut self) {
        self.message_parts.push(std::mem::take(&mut self.text));
    }

    pub fn finish(mut self) -> ParsedTranslation {
        self.store_message_part();
        make_parsed_translation(self.message_parts, self.placeholder_names, None, None)
    }
}

fn normalize_placeholder_name(name: &str) -> String {
    name.replace('-', "_")
}

pub struct MessageSerializer<'c> {
    config: &'c MessageSerializerConfig,
    url: &'c str,
    contents: &'c str,
}

impl<'c> MessageSerializer<'c> {
    pub fn new(config: &'c MessageSerializerConfig, url: &'c str, contents: &'c str) -> Self {
        MessageSerializer {
            config,
            url,
            contents,
        }
    }

    /// Serialize the children of `element` into a translation.
    pub fn serialize(&self, element: Node<'_, '_>) -> Result<ParsedTranslation, TranslationParseError> {
        let mut renderer = TargetMessageRenderer::new();
        self.visit_children(element, &mut renderer)?;
        if renderer.in_icu() {
            return Err(TranslationParseError::at(
                element,
                self.url,
                self.contents,
                "Unterminated ICU expression found in message.",
            ));
        }
        Ok(renderer.finish())
    }

    fn visit_children(
        &self,
        parent: Node<'_, '_>,
        renderer: &mut TargetMessageRenderer,
    ) -> Result<(), TranslationParseError> {
        for child in parent.children() {
            if child.is_text() {
                renderer.text(child.text().unwrap_or_default());
            } else if child.is_element() {
                self.visit_element(child, renderer)?;
            }
        }
        Ok(())
    }

    fn visit_element(
        &self,
        element: Node<'_, '_>,
        renderer: &mut TargetMessageRenderer,
    ) -> Result<(), TranslationParseError> {
        let name = element.tag_name().name();
        let placeholder = &self.config.placeholder;

        if name == placeholder.element_name {
            let ph_name = self.required_attribute(element, placeholder.name_attribute)?;
            renderer.placeholder(ph_name);
            return Ok(());
        }

        if let Some(container) = self.config.placeholder_container.filter(|c| c.element_name == name) {
            let start = self.required_attribute(element, container.start_attribute)?;
            let end = self.required_attribute(element, container.end_attribute)?;
            renderer.placeholder(start);
            self.visit_children(element, renderer)?;
            renderer.placeholder(end);
            return Ok(());
        }

        if self.config.inline_elements.contains(&name) {
            return self.visit_children(element, renderer);
        }

        Err(TranslationParseError::at(
            element,
            self.url,
            self.contents,
            "Invalid element found in message.",
        ))
    }

    fn required_attribute<'a>(
        &self,
        element: Node<'a, '_>,
        attr_name: &str,
    ) -> Result<&'a str, TranslationParseError> {
        element.attribute(attr_name).ok_or_else(|| {
            TranslationParseError::at(
                element,
                self.url,
                self.contents,
                format!("Missing required \"{}\" attribute:", attr_name),
            )
        })
    }
}
