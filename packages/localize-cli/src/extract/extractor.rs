//! Extractor Module
//!
//! Finds `$localize` messages in JavaScript sources.

use crate::extract::source_file_utils::{
    LocalizeCallRecognizer, LocalizeRecognizer, RecognizeContext, TaggedTemplateRecognizer,
};
use crate::extract::ExtractError;
use localize::i18n::{parse_message, ParsedMessage, TemplateParts};
use localize::Diagnostics;
use oxc_allocator::Allocator;
use oxc_ast::ast::Expression;
use oxc_ast_visit::{walk, Visit};
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use std::collections::HashSet;
use std::path::Path;

pub const LOCALIZE_NAME: &str = "$localize";

/// Collects the messages of one or more source files, keeping the first
/// message seen for each id.
pub struct Extractor {
    messages: Vec<ParsedMessage>,
    seen_ids: HashSet<String>,
    recognizers: Vec<Box<dyn LocalizeRecognizer>>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Extractor {
            messages: Vec::new(),
            seen_ids: HashSet::new(),
            recognizers: vec![Box::new(TaggedTemplateRecognizer), Box::new(LocalizeCallRecognizer)],
        }
    }

    pub fn messages(&self) -> &[ParsedMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<ParsedMessage> {
        self.messages
    }

    /// Add messages found elsewhere, skipping ids already present.
    pub fn add_messages(&mut self, messages: impl IntoIterator<Item = ParsedMessage>) {
        for message in messages {
            if self.seen_ids.insert(message.id.clone()) {
                self.messages.push(message);
            }
        }
    }

    /// Extract the messages of one source file.
    ///
    /// Problems with a single call site are recorded as errors and the call
    /// site is skipped. A file that does not parse is skipped with a warning.
    pub fn extract_messages(&mut self, file_path: &str, source_text: &str, diagnostics: &mut Diagnostics) {
        if !source_text.contains(LOCALIZE_NAME) {
            return;
        }

        let allocator = Allocator::default();
        let source_type = SourceType::from_path(Path::new(file_path)).unwrap_or_else(|_| SourceType::mjs());
        let parser_ret = Parser::new(&allocator, source_text, source_type).parse();
        if parser_ret.panicked || !parser_ret.errors.is_empty() {
            let reason = parser_ret
                .errors
                .first()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unrecoverable syntax error".to_string());
            let error = ExtractError::SourceParse {
                file: file_path.to_string(),
                reason,
            };
            diagnostics.warn(error.to_string());
            return;
        }

        let scoping = SemanticBuilder::new().build(&parser_ret.program).semantic.into_scoping();
        let mut visitor = LocalizeVisitor {
            ctx: RecognizeContext {
                source_text,
                scoping: &scoping,
                localize_name: LOCALIZE_NAME,
            },
            recognizers: &self.recognizers,
            found: Vec::new(),
        };
        visitor.visit_program(&parser_ret.program);
        let found = visitor.found;

        tracing::debug!(file = file_path, call_sites = found.len(), "scanned source file");
        for result in found {
            match result.and_then(|parts| parse_message(&parts).map_err(ExtractError::from)) {
                Ok(message) => self.add_messages([message]),
                Err(error) => diagnostics.error(format!("{}: {}", file_path, error)),
            }
        }
    }
}

/// Walks a program and hands every expression to the recognizers.
struct LocalizeVisitor<'s> {
    ctx: RecognizeContext<'s>,
    recognizers: &'s [Box<dyn LocalizeRecognizer>],
    found: Vec<Result<TemplateParts, ExtractError>>,
}

impl<'a, 's> Visit<'a> for LocalizeVisitor<'s> {
    fn visit_expression(&mut self, it: &Expression<'a>) {
        if let Some(result) = self
            .recognizers
            .iter()
            .find_map(|recognizer| recognizer.recognize(it, &self.ctx))
        {
            self.found.push(result);
        }
        walk::walk_expression(self, it);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> (Vec<ParsedMessage>, Diagnostics) {
        let mut extractor = Extractor::new();
        let mut diagnostics = Diagnostics::new();
        extractor.extract_messages("main.js", source, &mut diagnostics);
        (extractor.into_messages(), diagnostics)
    }

    #[test]
    fn test_skips_files_without_localize() {
        let (messages, diagnostics) = extract("const a = `x`;");
        assert!(messages.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_extracts_tagged_templates() {
        let (messages, diagnostics) = extract("const t = $localize`Hello, ${user.name}:name:!`;");
        assert!(diagnostics.is_empty());
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "Hello, {$name}!");
        assert_eq!(messages[0].substitutions, vec!["user.name"]);
    }

    #[test]
    fn test_ignores_shadowed_localize() {
        let (messages, _) = extract("function f($localize) { return $localize`Hi`; }");
        assert!(messages.is_empty());
    }

    #[test]
    fn test_warns_about_unparsable_files() {
        let (messages, diagnostics) = extract("$localize`a` +;");
        assert!(messages.is_empty());
        assert!(!diagnostics.has_errors());
        assert!(diagnostics.messages()[0].message.starts_with("Unable to parse source file \"main.js\""));
    }
}
