//! Extract Module
//!
//! The `extract` command: find `$localize` messages in compiled sources and
//! write them to translation files.

pub mod extractor;
pub mod source_file_utils;

pub use extractor::{Extractor, LOCALIZE_NAME};
pub use source_file_utils::{
    LocalizeCallRecognizer, LocalizeRecognizer, RecognizeContext, TaggedTemplateRecognizer,
};

use crate::file_utils::{self, FileError};
use crate::logging::Logger;
use localize::i18n::{get_translation_serializer, BlockParseError, ParsedMessage, TranslationFormat};
use localize::Diagnostics;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unexpected messageParts for $localize (expected an array of strings).")]
    UnexpectedMessageParts,
    #[error("Unexpected argument for $localize (spread substitutions are not supported).")]
    UnexpectedSubstitution,
    #[error("Invalid escape sequence in $localize template part \"{raw}\".")]
    InvalidEscape { raw: String },
    #[error(transparent)]
    Block(#[from] BlockParseError),
    #[error("Unable to parse source file \"{file}\": {reason}")]
    SourceParse { file: String, reason: String },
    #[error("Multiple locales detected (\"{locales}\") but output \"{output}\" is not a directory")]
    MultipleLocales { locales: String, output: String },
    #[error("No messages found. You should build the angular app without a language target for this command to work.")]
    NoMessages,
    #[error(transparent)]
    File(#[from] FileError),
}

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub source_glob: String,
    pub format: TranslationFormat,
    pub output_path: String,
    /// Empty means the default locale.
    pub locales: Vec<String>,
}

impl ExtractOptions {
    pub fn new(source_glob: impl Into<String>, format: TranslationFormat, output_path: impl Into<String>) -> Self {
        ExtractOptions {
            source_glob: source_glob.into(),
            format,
            output_path: output_path.into(),
            locales: vec![DEFAULT_LOCALE.to_string()],
        }
    }

    pub fn with_locales(mut self, locales: Vec<String>) -> Self {
        self.locales = locales;
        self
    }

    fn effective_locales(&self) -> Vec<String> {
        if self.locales.is_empty() {
            vec![DEFAULT_LOCALE.to_string()]
        } else {
            self.locales.clone()
        }
    }
}

/// Run the `extract` command.
///
/// Returns the paths of the generated files. Problems with single files are
/// recorded in `diagnostics`; an `Err` means the command as a whole failed.
pub fn extract_translations(
    options: &ExtractOptions,
    diagnostics: &mut Diagnostics,
    logger: &dyn Logger,
) -> Result<Vec<PathBuf>, ExtractError> {
    let output = Path::new(&options.output_path);
    let locales = options.effective_locales();
    let file_output = file_utils::is_file_output(output);
    if file_output && locales.len() > 1 {
        return Err(ExtractError::MultipleLocales {
            locales: locales.join(","),
            output: options.output_path.clone(),
        });
    }

    let files = file_utils::dedup_es_variants(file_utils::glob_files(&options.source_glob)?);
    logger.debug(&format!(
        "Found {} source file(s) matching \"{}\"",
        files.len(),
        options.source_glob
    ));

    let results: Vec<(Vec<ParsedMessage>, Diagnostics)> = files.par_iter().map(|file| extract_file(file)).collect();

    let serializer = get_translation_serializer(options.format);
    let mut generated = Vec::new();

    if file_output {
        let mut extractor = Extractor::new();
        for (file, (messages, file_diagnostics)) in files.iter().zip(results) {
            logger.info(&format!("Extracting translations from \"{}\"", file.display()));
            diagnostics.merge(file_diagnostics);
            extractor.add_messages(messages);
        }
        if extractor.messages().is_empty() {
            return Err(ExtractError::NoMessages);
        }

        let contents = serializer.render_file(extractor.messages(), &locales[0], false);
        file_utils::write_file(output, &contents)?;
        logger.info(&format!("  Generated file \"{}\"", output.display()));
        generated.push(output.to_path_buf());
    } else {
        for (file, (messages, file_diagnostics)) in files.iter().zip(results) {
            logger.info(&format!("Extracting translations from \"{}\"", file.display()));
            diagnostics.merge(file_diagnostics);
            if messages.is_empty() {
                continue;
            }
            for locale in &locales {
                let target = output.join(file_utils::localized_file_name(file, locale, options.format.extension()));
                if generated.contains(&target) {
                    diagnostics.error(file_utils::collision_message(file, &target));
                    continue;
                }
                let contents = serializer.render_file(&messages, locale, false);
                file_utils::write_file(&target, &contents)?;
                logger.info(&format!("  Generated file \"{}\"", target.display()));
                generated.push(target);
            }
        }
        if generated.is_empty() {
            return Err(ExtractError::NoMessages);
        }
    }

    Ok(generated)
}

/// Read and extract one source file with its own diagnostics.
fn extract_file(file: &Path) -> (Vec<ParsedMessage>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let path = file.display().to_string();
    match fs::read_to_string(file) {
        Ok(source) => {
            let mut extractor = Extractor::new();
            extractor.extract_messages(&path, &source, &mut diagnostics);
            (extractor.into_messages(), diagnostics)
        }
        Err(error) => {
            diagnostics.error(format!("Unable to read source file \"{}\": {}", path, error));
            (Vec::new(), diagnostics)
        }
    }
}
