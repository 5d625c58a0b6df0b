//! Convert Module
//!
//! The `convert` command: read translation files in any supported format and
//! write them out in another one.

use crate::extract::DEFAULT_LOCALE;
use crate::file_utils::{self, FileError};
use crate::logging::Logger;
use indexmap::IndexMap;
use localize::i18n::{
    get_translation_serializer, translation_to_message, ParsedMessage, ParsedTranslation,
    ParsedTranslationBundle, TranslationFormat, TranslationLoader,
};
use localize::Diagnostics;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Couldn't find any file to convert.")]
    NoFiles,
    #[error("Format \"{0}\" cannot hold translations and is not a valid conversion target.")]
    UnsupportedFormat(TranslationFormat),
    #[error(transparent)]
    File(#[from] FileError),
}

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub source_glob: String,
    pub format: TranslationFormat,
    pub output_path: String,
}

impl ConvertOptions {
    pub fn new(source_glob: impl Into<String>, format: TranslationFormat, output_path: impl Into<String>) -> Self {
        ConvertOptions {
            source_glob: source_glob.into(),
            format,
            output_path: output_path.into(),
        }
    }
}

/// Run the `convert` command and return the paths of the generated files.
pub fn convert_files(
    options: &ConvertOptions,
    diagnostics: &mut Diagnostics,
    logger: &dyn Logger,
) -> Result<Vec<PathBuf>, ConvertError> {
    if !options.format.supports_target() {
        return Err(ConvertError::UnsupportedFormat(options.format));
    }

    logger.info(&format!(
        "Converting files from source \"{}\" to format \"{}\" and output \"{}\"",
        options.source_glob, options.format, options.output_path
    ));

    let files = file_utils::glob_files(&options.source_glob)?;
    let loader = TranslationLoader::new();
    let loaded: Vec<(Option<ParsedTranslationBundle>, Diagnostics)> =
        files.par_iter().map(|file| load_file(&loader, file)).collect();

    let mut bundles = Vec::new();
    for (file, (bundle, file_diagnostics)) in files.iter().zip(loaded) {
        diagnostics.merge(file_diagnostics);
        if let Some(bundle) = bundle {
            bundles.push((file, bundle));
        }
    }
    if bundles.is_empty() {
        return Err(ConvertError::NoFiles);
    }
    logger.debug(&format!("Loaded {} translation file(s)", bundles.len()));

    let output = Path::new(&options.output_path);
    let serializer = get_translation_serializer(options.format);
    let mut generated = Vec::new();

    if file_utils::is_file_output(output) {
        let locale = bundles
            .first()
            .and_then(|(_, bundle)| bundle.locale.clone())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        let mut translations: IndexMap<&str, &ParsedTranslation> = IndexMap::new();
        for (_, bundle) in &bundles {
            for (id, translation) in &bundle.translations {
                translations.entry(id.as_str()).or_insert(translation);
            }
        }

        let messages = to_messages(translations);
        file_utils::write_file(output, &serializer.render_file(&messages, &locale, true))?;
        logger.info(&format!("  Generated file \"{}\"", output.display()));
        generated.push(output.to_path_buf());
    } else {
        for (file, bundle) in &bundles {
            let locale = bundle.locale.as_deref().unwrap_or(DEFAULT_LOCALE);
            let stem = file
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            let target = output.join(format!("{}.{}", stem, options.format.extension()));
            if generated.contains(&target) {
                diagnostics.error(file_utils::collision_message(file, &target));
                continue;
            }
            let translations = bundle.translations.iter().map(|(id, t)| (id.as_str(), t)).collect();
            let messages = to_messages(translations);
            file_utils::write_file(&target, &serializer.render_file(&messages, locale, true))?;
            logger.info(&format!("  Generated file \"{}\"", target.display()));
            generated.push(target);
        }
    }

    Ok(generated)
}

fn load_file(loader: &TranslationLoader, file: &Path) -> (Option<ParsedTranslationBundle>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let path = file.display().to_string();
    let bundle = match fs::read_to_string(file) {
        Ok(contents) => loader.load_bundle(&path, &contents, &mut diagnostics),
        Err(error) => {
            diagnostics.error(format!("Unable to read translation file \"{}\": {}", path, error));
            None
        }
    };
    (bundle, diagnostics)
}

fn to_messages(translations: IndexMap<&str, &ParsedTranslation>) -> Vec<ParsedMessage> {
    translations
        .into_iter()
        .map(|(id, translation)| translation_to_message(id, translation))
        .collect()
}
