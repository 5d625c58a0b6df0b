#![deny(clippy::all)]

/**
 * locl - command line tools
 *
 * The `extract` and `convert` commands on top of the localize core.
 */
// Re-export the core for convenience
pub use localize;

pub mod config;
pub mod convert;
pub mod extract;
pub mod file_utils;
pub mod logging;

pub use config::{CommandArgs, ConfigError, LoclConfig};
pub use convert::{convert_files, ConvertError, ConvertOptions};
pub use extract::{extract_translations, ExtractError, ExtractOptions};
