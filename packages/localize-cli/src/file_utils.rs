//! File Utilities
//!
//! Source globbing and output writing shared by the `extract` and `convert`
//! commands.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

static ES_VARIANT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-es(5|2015)\.").expect("valid es variant pattern"));
static ES_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-es(5|2015)").expect("valid es suffix pattern"));

#[derive(Debug, Error)]
pub enum FileError {
    #[error("Invalid source pattern \"{pattern}\": {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("Unable to write file \"{path}\": {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Files matching `pattern`, in glob order. Directories and unreadable
/// entries are left out.
pub fn glob_files(pattern: &str) -> Result<Vec<PathBuf>, FileError> {
    let entries = glob::glob(pattern).map_err(|source| FileError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(entries.filter_map(Result::ok).filter(|path| path.is_file()).collect())
}

/// Keep one file out of each group of `-es5.` / `-es2015.` builds of the same
/// bundle. The first file of a group wins.
pub fn dedup_es_variants(files: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    files
        .into_iter()
        .filter(|file| {
            let key = ES_VARIANT.replace(&file.to_string_lossy(), ".").into_owned();
            seen.insert(key)
        })
        .collect()
}

/// Whether `output` names a file rather than a directory.
///
/// An existing path is judged by what it is; a missing one is a file when it
/// has an extension.
pub fn is_file_output(output: &Path) -> bool {
    match fs::metadata(output) {
        Ok(metadata) => metadata.is_file(),
        Err(_) => output.extension().is_some(),
    }
}

/// Name of the file generated from `source` for one locale in directory mode:
/// `main-es2015.js` becomes `main.<locale>.<extension>`.
pub fn localized_file_name(source: &Path, locale: &str, extension: &str) -> String {
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = file_name.strip_suffix(".js").unwrap_or(&file_name);
    let base = ES_SUFFIX.replace(base, "");
    format!("{}.{}.{}", base, locale, extension)
}

/// Error text for a source whose output path was already written by an
/// earlier source of the same run. The earlier file is kept.
pub fn collision_message(source: &Path, target: &Path) -> String {
    format!(
        "Skipping \"{}\": output file \"{}\" was already generated from another file.",
        source.display(),
        target.display()
    )
}

/// Write `contents` to `path`, creating missing parent directories.
pub fn write_file(path: &Path, contents: &str) -> Result<(), FileError> {
    let write = || -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    };
    write().map_err(|source| FileError::Write {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_es_variants_of_the_same_bundle() {
        let files = vec![
            PathBuf::from("dist/main-es2015.js"),
            PathBuf::from("dist/main-es5.js"),
            PathBuf::from("dist/polyfills-es5.js"),
        ];
        assert_eq!(
            dedup_es_variants(files),
            vec![PathBuf::from("dist/main-es2015.js"), PathBuf::from("dist/polyfills-es5.js")]
        );
    }

    #[test]
    fn test_name_localized_files() {
        assert_eq!(localized_file_name(Path::new("dist/main-es2015.js"), "fr", "xlf"), "main.fr.xlf");
        assert_eq!(localized_file_name(Path::new("vendor.js"), "en", "json"), "vendor.en.json");
        assert_eq!(localized_file_name(Path::new("chunk.mjs"), "en", "xtb"), "chunk.mjs.en.xtb");
    }

    #[test]
    fn test_guess_output_kind_of_missing_paths() {
        assert!(is_file_output(Path::new("does/not/exist/messages.xlf")));
        assert!(!is_file_output(Path::new("does/not/exist/i18n")));
    }

    #[test]
    fn test_collision_message_names_both_paths() {
        assert_eq!(
            collision_message(Path::new("dist/b/main.js"), Path::new("i18n/main.en.json")),
            "Skipping \"dist/b/main.js\": output file \"i18n/main.en.json\" was already generated from another file."
        );
    }
}
