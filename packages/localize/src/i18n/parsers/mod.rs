//! Parsers Module
//!
//! Readers for translation files and the loader that picks the right one
//! for a given file.

pub mod json;
pub mod message_serializer;
pub mod xliff;
pub mod xliff2;
pub mod xml_utils;
pub mod xtb;

use crate::diagnostics::Diagnostics;
use crate::i18n::block::BlockParseError;
use crate::i18n::message::ParsedTranslationBundle;
use crate::parse_util::{ParseError, ParseSourceSpan};
use thiserror::Error;

pub use json::SimpleJsonTranslationParser;
pub use xliff::Xliff1TranslationParser;
pub use xliff2::Xliff2TranslationParser;
pub use xtb::XtbTranslationParser;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationParseError {
    /// A problem at a known place in the file.
    #[error("{0}")]
    Located(ParseError),
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Block(#[from] BlockParseError),
}

impl TranslationParseError {
    /// Error located at an XML node of `contents`.
    pub fn at(node: roxmltree::Node<'_, '_>, url: &str, contents: &str, msg: impl Into<String>) -> Self {
        let range = node.range();
        let span = ParseSourceSpan::from_range(contents, url, range.start, range.end);
        TranslationParseError::Located(ParseError::new(span, msg))
    }

    /// The error message without location.
    pub fn message(&self) -> String {
        match self {
            TranslationParseError::Located(error) => error.msg.clone(),
            TranslationParseError::Invalid(msg) => msg.clone(),
            TranslationParseError::Block(error) => error.to_string(),
        }
    }
}

/// Data found while analyzing a file, reused by `parse`.
#[derive(Debug)]
pub enum ParseHint<'a> {
    Json(serde_json::Value),
    Xml(roxmltree::Document<'a>),
}

/// Outcome of analyzing a file with one parser.
#[derive(Debug)]
pub struct ParseAnalysis<'a> {
    pub can_parse: bool,
    /// Why the file was rejected, or warnings about an accepted file.
    pub diagnostics: Diagnostics,
    pub hint: Option<ParseHint<'a>>,
}

impl<'a> ParseAnalysis<'a> {
    pub fn rejected(diagnostics: Diagnostics) -> Self {
        ParseAnalysis {
            can_parse: false,
            diagnostics,
            hint: None,
        }
    }
}

/// A reader for one translation file format.
pub trait TranslationParser: Send + Sync {
    /// Short name of the format, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Cheaply check whether this parser understands the file.
    fn analyze<'a>(&self, file_path: &str, contents: &'a str) -> ParseAnalysis<'a>;

    /// Read the file. `hint` is the value returned by [`analyze`]; when it is
    /// `None` the file is analyzed again.
    ///
    /// [`analyze`]: TranslationParser::analyze
    fn parse<'a>(
        &self,
        file_path: &str,
        contents: &'a str,
        hint: Option<ParseHint<'a>>,
    ) -> Result<ParsedTranslationBundle, TranslationParseError>;
}

/// Picks the first parser that accepts a file and reads it.
pub struct TranslationLoader {
    parsers: Vec<Box<dyn TranslationParser>>,
}

impl Default for TranslationLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationLoader {
    /// Loader trying XLIFF 2.0, XLIFF 1.2, XTB then JSON.
    pub fn new() -> Self {
        TranslationLoader {
            parsers: vec![
                Box::new(Xliff2TranslationParser),
                Box::new(Xliff1TranslationParser),
                Box::new(XtbTranslationParser),
                Box::new(SimpleJsonTranslationParser),
            ],
        }
    }

    /// Parse one file.
    ///
    /// Returns `None` and records an error when no parser accepts the file
    /// or when the chosen parser fails. Warnings and errors recorded while
    /// parsing an accepted file are moved to `diagnostics`.
    pub fn load_bundle(
        &self,
        file_path: &str,
        contents: &str,
        diagnostics: &mut Diagnostics,
    ) -> Option<ParsedTranslationBundle> {
        let mut rejections = Diagnostics::new();

        for parser in &self.parsers {
            let analysis = parser.analyze(file_path, contents);
            if !analysis.can_parse {
                for diagnostic in analysis.diagnostics.messages() {
                    rejections.warn(format!("{}: {}", parser.name(), diagnostic.message));
                }
                continue;
            }

            tracing::debug!(file = file_path, format = parser.name(), "parsing translation file");
            diagnostics.merge(analysis.diagnostics);
            return match parser.parse(file_path, contents, analysis.hint) {
                Ok(mut bundle) => {
                    diagnostics.merge(std::mem::take(&mut bundle.diagnostics));
                    Some(bundle)
                }
                Err(error) => {
                    diagnostics.error(error.to_string());
                    None
                }
            };
        }

        diagnostics.error(rejections.format_diagnostics(&format!(
            "Unable to parse translation file \"{}\"",
            file_path
        )));
        None
    }
}
