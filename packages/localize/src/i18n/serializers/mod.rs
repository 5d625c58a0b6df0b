//! Serializers Module
//!
//! Writers for the supported translation file formats.

pub mod json;
pub mod serializer;
pub mod xliff;
pub mod xliff2;
pub mod xmb;
pub mod xml_helper;
pub mod xtb;

use std::fmt;
use std::str::FromStr;

// Re-export commonly used items
pub use json::JsonTranslationSerializer;
pub use serializer::TranslationSerializer;
pub use xliff::Xliff1TranslationSerializer;
pub use xliff2::Xliff2TranslationSerializer;
pub use xmb::XmbTranslationSerializer;
pub use xml_helper::{escape_xml, TagOptions, XmlFile};
pub use xtb::XtbTranslationSerializer;

/// The translation file formats that can be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationFormat {
    Json,
    Xliff1,
    Xliff2,
    Xmb,
    Xtb,
}

impl TranslationFormat {
    /// File extension used for outputs in this format.
    ///
    /// Both XLIFF versions share `xlf`.
    pub fn extension(&self) -> &'static str {
        match self {
            TranslationFormat::Json => "json",
            TranslationFormat::Xliff1 | TranslationFormat::Xliff2 => "xlf",
            TranslationFormat::Xmb => "xmb",
            TranslationFormat::Xtb => "xtb",
        }
    }

    /// Whether this format can hold translations of a target locale.
    pub fn supports_target(&self) -> bool {
        !matches!(self, TranslationFormat::Xmb)
    }
}

impl FromStr for TranslationFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(TranslationFormat::Json),
            "xlf" | "xlif" | "xliff" | "xlf1" | "xliff1" => Ok(TranslationFormat::Xliff1),
            "xlf2" | "xlif2" | "xliff2" => Ok(TranslationFormat::Xliff2),
            "xmb" => Ok(TranslationFormat::Xmb),
            "xtb" => Ok(TranslationFormat::Xtb),
            _ => Err(format!(
                "Unsupported translation file format \"{}\". Expected one of: json, xlf, xliff1, xlf2, xliff2, xmb, xtb",
                s
            )),
        }
    }
}

impl fmt::Display for TranslationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TranslationFormat::Json => "json",
            TranslationFormat::Xliff1 => "xliff1",
            TranslationFormat::Xliff2 => "xliff2",
            TranslationFormat::Xmb => "xmb",
            TranslationFormat::Xtb => "xtb",
        };
        f.write_str(name)
    }
}

/// Get the writer for a format.
pub fn get_translation_serializer(format: TranslationFormat) -> Box<dyn TranslationSerializer> {
    match format {
        TranslationFormat::Json => Box::new(JsonTranslationSerializer),
        TranslationFormat::Xliff1 => Box::new(Xliff1TranslationSerializer),
        TranslationFormat::Xliff2 => Box::new(Xliff2TranslationSerializer),
        TranslationFormat::Xmb => Box::new(XmbTranslationSerializer),
        TranslationFormat::Xtb => Box::new(XtbTranslationSerializer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_format_aliases() {
        assert_eq!("xlf".parse::<TranslationFormat>(), Ok(TranslationFormat::Xliff1));
        assert_eq!("xliff2".parse::<TranslationFormat>(), Ok(TranslationFormat::Xliff2));
        assert_eq!("xtb".parse::<TranslationFormat>(), Ok(TranslationFormat::Xtb));
        assert!("po".parse::<TranslationFormat>().is_err());
    }

    #[test]
    fn test_xliff_versions_share_an_extension() {
        assert_eq!(TranslationFormat::Xliff1.extension(), "xlf");
        assert_eq!(TranslationFormat::Xliff2.extension(), "xlf");
        assert_eq!(TranslationFormat::Json.extension(), "json");
    }
}
