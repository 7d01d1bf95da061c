//! Command-line interface for sqlclean
//! Strips comments and blank-line runs from SQL and prints the cleaned text or a highlighted rendering.
//!
//! Usage:
//!   sqlclean [`<path>`] [--format `<format>`] [--copy]   - Clean a file, or stdin when no path is given
//!   sqlclean --list-formats                              - List available output formats

mod clipboard;

use clap::{Arg, ArgAction, ArgMatches, Command};
use clipboard::Clipboard;
use sqlclean_config::{ConfigError, Loader, SqlCleanConfig, LOCAL_CONFIG_FILE};
use sqlclean_core::sql::formats::{FormatError, FormatRegistry};
use sqlclean_core::sql::highlight::highlight;
use sqlclean_core::sql::loader::{LoaderError, SourceLoader};
use std::io::{self, Write};
use thiserror::Error;

/// Format name that prints the cleaned text without markup.
const TEXT_FORMAT: &str = "text";

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

fn build_cli() -> Command {
    Command::new("sqlclean")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Strip comments and blank lines from SQL, with optional highlighting")
        .arg(
            Arg::new("path")
                .help("Path to the SQL file; reads stdin when omitted or '-'")
                .index(1),
        )
        .arg(
            Arg::new("keep-comments")
                .long("keep-comments")
                .help("Leave /* ... */ and -- comments in place")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("keep-blank-lines")
                .long("keep-blank-lines")
                .help("Do not collapse runs of blank lines")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("string-aware")
                .long("string-aware")
                .help("Ignore comment markers inside quoted literals")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'text' for cleaned text, or a renderer (see --list-formats)"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("copy")
                .long("copy")
                .help("Copy the cleaned text to the clipboard (OSC 52)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show diagnostic logs (honours RUST_LOG)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Suppress all logs")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
}

fn init_tracing(verbose: bool, quiet: bool) {
    let filter = if quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_flag("verbose"), matches.get_flag("quiet"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    if let Err(e) = handle_clean_command(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Layer the local file, the `--config` file and flag overrides over the defaults.
fn load_config(matches: &ArgMatches) -> Result<SqlCleanConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("keep-comments") {
        loader = loader.set_override("cleaning.remove_comments", false)?;
    }
    if matches.get_flag("keep-blank-lines") {
        loader = loader.set_override("cleaning.remove_blank_lines", false)?;
    }
    if matches.get_flag("string-aware") {
        loader = loader.set_override("cleaning.string_aware", true)?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build()
}

/// Handle the default command: clean the input and print it
fn handle_clean_command(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let options = config.clean_options();
    tracing::info!(?options, format = %config.output.format, "loaded configuration");

    let loader = match matches.get_one::<String>("path").map(String::as_str) {
        None | Some("-") => SourceLoader::from_reader(io::stdin().lock())?,
        Some(path) => SourceLoader::from_path(path)?,
    };
    let cleaned = loader.clean(&options);

    let mut stdout = io::stdout().lock();
    if config.output.format == TEXT_FORMAT {
        stdout.write_all(cleaned.as_bytes())?;
    } else {
        let registry = FormatRegistry::with_defaults();
        let rendered = registry.render(&highlight(&cleaned), &config.output.format)?;
        writeln!(stdout, "{}", rendered)?;
    }
    stdout.flush()?;

    if matches.get_flag("copy") {
        match Clipboard::detect().copy(&cleaned) {
            Ok(()) => tracing::info!(bytes = cleaned.len(), "copied cleaned text to clipboard"),
            Err(e) => eprintln!("Warning: {}", e),
        }
    }

    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    println!("  {}", TEXT_FORMAT);
    println!("    Cleaned text without markup (default)");
    println!();

    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|renderer| renderer.description())
            .unwrap_or_default();
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
