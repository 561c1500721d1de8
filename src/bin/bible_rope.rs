//! Command-line interface for bible-rope
//! Loads every translation named by the Bible index (or local files) and looks up one verse in all of them.
//!
//! Usage:
//!   bible-rope [--book `<book>`] [--chapterNumber `<n>`] [--verseNumber `<n>`]   - Look up a verse
//!   bible-rope --file `<path>` [--file `<path>` ...]                            - Use local translations
//!   bible-rope --list-books                                                 - List the canonical book names
//!   bible-rope --list-translations                                          - List the translations in the index

use std::io::{self, Write};
use std::path::PathBuf;

use bible_rope::rope::books::CANONICAL_BOOKS;
use bible_rope::rope::building::ParseFailurePolicy;
use bible_rope::rope::config::{Loader, Settings};
use bible_rope::rope::library::{Library, TranslationSource};
use bible_rope::rope::lookup::{LookupSeed, OutputFormat, Session};
use bible_rope::rope::source::Fetcher;
use bible_rope::rope::Error;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

/// Picked up from the working directory when present.
const LOCAL_CONFIG: &str = "bible-rope.toml";

fn main() {
    let matches = Command::new("bible-rope")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Look up a Bible verse across every loaded translation")
        .arg(
            Arg::new("book")
                .long("book")
                .help("The name of the book, like 'Genesis' or '2 Corinthians'"),
        )
        .arg(
            Arg::new("chapterNumber")
                .long("chapterNumber")
                .help("The number of the chapter, like 3 in John 3:16")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("verseNumber")
                .long("verseNumber")
                .help("The number of the verse, like 16 in John 3:16")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("index-url")
                .long("index-url")
                .help("URL of the `title = url` Bible index"),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .help("Load a local translation file instead of the index (repeatable)")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("skip-bad-lines")
                .long("skip-bad-lines")
                .help("Skip verse lines that do not parse instead of stopping")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Report format; with json, prompts go to stderr")
                .value_parser(value_parser!(OutputFormat))
                .default_value("text"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (repeat for more detail)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("list-books")
                .long("list-books")
                .help("List the canonical book names")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-translations")
                .long("list-translations")
                .help("List the translations named by the Bible index")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-books") {
        handle_list_books_command();
        return;
    }

    let settings = load_settings(&matches).unwrap_or_else(|e| exit_with(e));
    init_logging(&settings, matches.get_count("verbose"));

    let result = if matches.get_flag("list-translations") {
        handle_list_translations_command(&settings)
    } else {
        handle_lookup_command(&settings, &matches)
    };

    if let Err(e) = result {
        exit_with(e);
    }
}

fn load_settings(matches: &ArgMatches) -> Result<Settings, Error> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(url) = matches.get_one::<String>("index-url") {
        loader = loader.set_override("sources.index_url", url.as_str())?;
    }
    if matches.get_flag("skip-bad-lines") {
        loader = loader.set_override("loading.on_parse_error", "skip-line")?;
    }

    let mut settings = loader.build()?;
    if let Some(files) = matches.get_many::<PathBuf>("file") {
        settings.sources.files = files.cloned().collect();
    }
    Ok(settings)
}

/// `RUST_LOG` wins; otherwise the configured level, raised by each `-v`.
fn init_logging(settings: &Settings, verbosity: u8) {
    let level = match verbosity {
        0 => settings.logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Handle the default command: load, prompt, report
fn handle_lookup_command(settings: &Settings, matches: &ArgMatches) -> Result<(), Error> {
    let fetcher = Fetcher::new(&settings.network)?;

    let sources: Vec<TranslationSource> = if settings.sources.files.is_empty() {
        fetcher
            .fetch_index(&settings.sources.index_url)?
            .into_iter()
            .map(TranslationSource::from)
            .collect()
    } else {
        settings
            .sources
            .files
            .iter()
            .map(TranslationSource::from_file)
            .collect()
    };

    let policy: ParseFailurePolicy = settings.loading.on_parse_error;
    let library = Library::load(&sources, &fetcher, policy)?;

    let seed = LookupSeed {
        book: matches.get_one::<String>("book").cloned(),
        chapter: matches.get_one::<u32>("chapterNumber").copied(),
        verse: matches.get_one::<u32>("verseNumber").copied(),
    };
    let format = *matches
        .get_one::<OutputFormat>("format")
        .expect("format has a default value");

    // Keep stdout a single JSON document when a machine is reading it.
    let prompts: Box<dyn Write> = match format {
        OutputFormat::Json => Box::new(io::stderr()),
        OutputFormat::Text => Box::new(io::stdout()),
    };
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), prompts, io::stdout());
    session.run(&library, &seed, format)?;
    Ok(())
}

/// Handle the list-translations command
fn handle_list_translations_command(settings: &Settings) -> Result<(), Error> {
    let fetcher = Fetcher::new(&settings.network)?;
    let entries = fetcher.fetch_index(&settings.sources.index_url)?;

    println!("Available translations:\n");
    for entry in entries {
        println!("  {}", entry.title);
        println!("    {}", entry.url);
        println!();
    }
    Ok(())
}

/// Handle the list-books command
fn handle_list_books_command() {
    for book in CANONICAL_BOOKS {
        println!("{}", book);
    }
}

fn exit_with(e: Error) -> ! {
    eprintln!("Error: {}", e);
    if let Some(hint) = e.hint() {
        eprintln!("{}", hint);
    }
    std::process::exit(1);
}
