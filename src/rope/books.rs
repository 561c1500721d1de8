//! The 66 canonical book names accepted at the book prompt.
//!
//! Spelling follows the published plain-text translations (`Psalm`, not
//! `Psalms`; `Song of Solomon`). Matching is exact and case-sensitive.

pub const CANONICAL_BOOKS: [&str; 66] = [
    "1 Chronicles",
    "1 Corinthians",
    "1 John",
    "1 Kings",
    "1 Peter",
    "1 Samuel",
    "1 Thessalonians",
    "1 Timothy",
    "2 Chronicles",
    "2 Corinthians",
    "2 John",
    "2 Kings",
    "2 Peter",
    "2 Samuel",
    "2 Thessalonians",
    "2 Timothy",
    "3 John",
    "Acts",
    "Amos",
    "Colossians",
    "Daniel",
    "Deuteronomy",
    "Ecclesiastes",
    "Ephesians",
    "Esther",
    "Exodus",
    "Ezekiel",
    "Ezra",
    "Galatians",
    "Genesis",
    "Habakkuk",
    "Haggai",
    "Hebrews",
    "Hosea",
    "Isaiah",
    "James",
    "Jeremiah",
    "Job",
    "Joel",
    "John",
    "Jonah",
    "Joshua",
    "Jude",
    "Judges",
    "Lamentations",
    "Leviticus",
    "Luke",
    "Malachi",
    "Mark",
    "Matthew",
    "Micah",
    "Nahum",
    "Nehemiah",
    "Numbers",
    "Obadiah",
    "Philemon",
    "Philippians",
    "Proverbs",
    "Psalm",
    "Revelation",
    "Romans",
    "Ruth",
    "Song of Solomon",
    "Titus",
    "Zechariah",
    "Zephaniah",
];

pub fn is_canonical_book(name: &str) -> bool {
    CANONICAL_BOOKS.contains(&name)
}
