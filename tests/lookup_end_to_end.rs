//! Integration tests for loading fixture translations and looking up verses
//! through the library API.

use bible_rope::rope::config::load_defaults;
use bible_rope::rope::library::{Library, TranslationSource, VerseHit};
use bible_rope::rope::lookup::{LookupSeed, OutputFormat, Session};
use bible_rope::rope::source::Fetcher;
use bible_rope::rope::ParseFailurePolicy;
use std::io::Cursor;
use std::path::PathBuf;

fn fixture(name: &str) -> TranslationSource {
    TranslationSource::from_file(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name),
    )
}

fn load(names: &[&str]) -> Library {
    let settings = load_defaults().expect("defaults to deserialize");
    let fetcher = Fetcher::new(&settings.network).expect("client to build");
    let sources: Vec<_> = names.iter().map(|name| fixture(name)).collect();
    Library::load(&sources, &fetcher, ParseFailurePolicy::Abort).expect("fixtures to load")
}

#[test]
fn fixture_tables_hold_every_verse_line() {
    let library = load(&["kjv.txt", "web.txt"]);
    let counts: Vec<_> = library.iter().map(|t| t.table.len()).collect();
    assert_eq!(counts, vec![8, 3]);
}

#[test]
fn john_3_16_comes_from_each_translation_that_has_it() {
    let library = load(&["kjv.txt", "fragment.txt", "web.txt"]);
    let mut session = Session::new(
        Cursor::new(b"John\n3\n16\n".to_vec()),
        Vec::new(),
        Vec::new(),
    );

    let hits = session
        .run(&library, &LookupSeed::default(), OutputFormat::Text)
        .unwrap();

    let titles: Vec<_> = hits.iter().map(|hit| hit.translation.as_str()).collect();
    assert_eq!(titles, vec!["kjv", "web"]);

    let (_, output) = session.into_writers();
    let output = String::from_utf8(output).unwrap();
    let report_lines: Vec<_> = output
        .lines()
        .filter(|line| line.ends_with(":    kjv") || line.ends_with(":    web"))
        .collect();
    assert_eq!(report_lines.len(), 2);
}

#[test]
fn reference_translation_drives_validation() {
    // The fragment only has Mark 1:1, so Genesis is not accepted even though
    // the other translation has it.
    let library = load(&["fragment.txt", "kjv.txt"]);
    let mut session = Session::new(
        Cursor::new(b"Genesis\nMark\n1\n1\n".to_vec()),
        Vec::new(),
        Vec::new(),
    );

    let hits = session
        .run(&library, &LookupSeed::default(), OutputFormat::Text)
        .unwrap();
    assert_eq!(
        hits,
        vec![
            VerseHit {
                translation: "fragment".to_string(),
                text: "The beginning of the Good News of Jesus Christ, the Son of God.".to_string(),
            },
            VerseHit {
                translation: "kjv".to_string(),
                text: "The beginning of the gospel of Jesus Christ, the Son of God;".to_string(),
            },
        ]
    );

    let (prompts, _) = session.into_writers();
    let prompts = String::from_utf8(prompts).unwrap();
    assert!(prompts.contains("Genesis is not in the loaded text, please choose one of:\nMark"));
}
