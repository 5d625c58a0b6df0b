/**
 * locl
 *
 * Extract `$localize` messages from compiled sources and convert
 * translation files between formats.
 */
use clap::{Arg, ArgAction, ArgMatches, Command};
use localize::Diagnostics;
use localize_cli::logging::{log_diagnostic, ConsoleLogger, LogLevel, Logger};
use localize_cli::{convert_files, extract_translations, CommandArgs, LoclConfig};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn source_arg(help: &'static str) -> Arg {
    Arg::new("source")
        .short('s')
        .long("source")
        .value_name("GLOB")
        .help(help)
}

fn format_arg() -> Arg {
    Arg::new("format")
        .short('f')
        .long("format")
        .value_name("FORMAT")
        .help("The format of the translation files to generate [json, xlf, xliff1, xlf2, xliff2, xmb, xtb]")
}

fn output_arg(help: &'static str) -> Arg {
    Arg::new("output-path")
        .short('o')
        .long("output-path")
        .visible_alias("outputPath")
        .value_name("PATH")
        .help(help)
}

fn build_cli() -> Command {
    Command::new("locl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract and convert $localize translations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Path to a config file (defaults to the nearest .loclrc or .locl.json)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print debug output"),
        )
        .subcommand(
            Command::new("extract")
                .about("Extract translations from your application")
                .arg(source_arg("A glob pattern indicating what files to search for translations, e.g. `./dist/**/*.js`"))
                .arg(format_arg())
                .arg(output_arg(
                    "A path to a file or a folder where the translation files will be written",
                ))
                .arg(
                    Arg::new("locale")
                        .short('l')
                        .long("locale")
                        .value_name("LOCALE")
                        .action(ArgAction::Append)
                        .help("The locale for the extracted file, \"en\" by default"),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert translation files from one format to another")
                .arg(source_arg("A glob pattern indicating what files to convert, e.g. `./src/i18n/*.xlf`"))
                .arg(format_arg())
                .arg(output_arg("A path to a file or a folder where the converted files will be written")),
        )
}

fn command_args(matches: &ArgMatches) -> CommandArgs {
    let locales = matches
        .try_get_many::<String>("locale")
        .ok()
        .flatten()
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    CommandArgs {
        source: matches.get_one::<String>("source").cloned(),
        format: matches.get_one::<String>("format").cloned(),
        output_path: matches.get_one::<String>("output-path").cloned(),
        locales,
    }
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<LoclConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => LoclConfig::load(Path::new(path)),
        None => LoclConfig::discover(&std::env::current_dir()?),
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(matches: &ArgMatches, diagnostics: &mut Diagnostics, logger: &dyn Logger) -> anyhow::Result<()> {
    let config = load_config(matches)?;

    match matches.subcommand() {
        Some(("extract", sub_matches)) => {
            let options = command_args(sub_matches).with_defaults(&config).into_extract_options()?;
            extract_translations(&options, diagnostics, logger)?;
        }
        Some(("convert", sub_matches)) => {
            let options = command_args(sub_matches).with_defaults(&config).into_convert_options()?;
            convert_files(&options, diagnostics, logger)?;
        }
        _ => unreachable!("a subcommand is required"),
    }
    Ok(())
}

fn main() {
    let matches = build_cli().get_matches();
    let verbose = matches.get_flag("verbose");
    init_tracing(verbose);

    let logger = ConsoleLogger::new(LogLevel::for_verbosity(verbose));
    let mut diagnostics = Diagnostics::new();

    if let Err(error) = run(&matches, &mut diagnostics, &logger) {
        diagnostics.error(format!("{:#}", error));
    }

    let exit_code = diagnostics.exit_code();
    for diagnostic in diagnostics.drain() {
        log_diagnostic(&logger, &diagnostic);
    }
    process::exit(exit_code);
}
