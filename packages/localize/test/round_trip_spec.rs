//! Conversion Tests
//!
//! Reading a translation file and writing it back in another format.

mod fixtures;

use fixtures::*;
use localize::i18n::{parse_message, translation_to_message, ParsedMessage, TemplateParts, TranslationLoader};
use localize::{get_translation_serializer, Diagnostics, TranslationFormat};

fn load_messages(path: &str, contents: &str) -> (String, Vec<ParsedMessage>) {
    let mut diagnostics = Diagnostics::new();
    let bundle = TranslationLoader::new()
        .load_bundle(path, contents, &mut diagnostics)
        .expect("bundle should load");
    let messages = bundle
        .translations
        .iter()
        .map(|(id, translation)| translation_to_message(id, translation))
        .collect();
    (bundle.locale.unwrap_or_else(|| "en".to_string()), messages)
}

fn convert(path: &str, contents: &str, format: TranslationFormat) -> String {
    let (locale, messages) = load_messages(path, contents);
    get_translation_serializer(format).render_file(&messages, &locale, true)
}

#[test]
fn should_convert_xliff1_to_xliff2() {
    assert_eq!(
        convert("messages.fr.xlf", TRANSLATED_XLF, TranslationFormat::Xliff2),
        TRANSLATED_XLF2
    );
}

#[test]
fn should_convert_xliff1_to_json() {
    assert_eq!(
        convert("messages.fr.xlf", TRANSLATED_XLF, TranslationFormat::Json),
        TRANSLATED_JSON
    );
}

#[test]
fn should_convert_xliff1_to_xtb_keeping_notes() {
    assert_eq!(
        convert("messages.fr.xlf", TRANSLATED_XLF, TranslationFormat::Xtb),
        TRANSLATED_XTB
    );
}

#[test]
fn should_convert_json_to_xliff1_targets() {
    assert_eq!(
        convert("messages.fr.json", TRANSLATED_JSON, TranslationFormat::Xliff1),
        SIMPLE_TRANSLATED_XLF
    );
}

#[test]
fn should_convert_xtb_back_to_xliff1() {
    let output = convert("messages.fr.xtb", TRANSLATED_XTB, TranslationFormat::Xliff1);
    assert!(output.contains(
        "        <note priority=\"1\" from=\"description\">An introduction header for this sample</note>\n"
    ));
    assert!(output.contains("        <target>id personnalisé!</target>\n"));
}

#[test]
fn should_keep_text_that_looks_like_a_block() {
    let contents = r#"{"locale": "fr", "translations": {"x": "{$PH}:pas un bloc:"}}"#;
    let (_, messages) = load_messages("m.json", contents);
    assert_eq!(messages[0].message_parts, vec!["", ":pas un bloc:"]);
    assert_eq!(messages[0].placeholder_names, vec!["PH"]);
}

#[test]
fn should_convert_target_only_xliff1_to_json() {
    assert_eq!(
        convert("messages.fr.xlf", SIMPLE_TRANSLATED_XLF, TranslationFormat::Json),
        TRANSLATED_JSON
    );
}

#[test]
fn should_keep_custom_ids_through_target_only_xliff1() {
    let message = parse_message(&TemplateParts::from_cooked(vec![":@@foo:custom id!".to_string()])).unwrap();
    let xliff = get_translation_serializer(TranslationFormat::Xliff1).render_file(&[message], "en", true);
    assert!(!xliff.contains("<source>"));

    let json = convert("messages.en.xlf", &xliff, TranslationFormat::Json);
    assert_eq!(
        json,
        "{\n  \"locale\": \"en\",\n  \"translations\": {\n    \"foo\": \"custom id!\"\n  }\n}"
    );
}
