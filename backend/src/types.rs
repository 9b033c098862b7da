use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// The six record files of the Sedra export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    #[serde(rename = "roots")]
    Roots,
    #[serde(rename = "lexemes")]
    Lexemes,
    #[serde(rename = "words")]
    Words,
    #[serde(rename = "english")]
    English,
    #[serde(rename = "etymology")]
    Etymology,
    #[serde(rename = "ubs")]
    Ubs,
}

impl RecordType {
    pub const ALL: [RecordType; 6] = [
        RecordType::Roots,
        RecordType::Lexemes,
        RecordType::Words,
        RecordType::English,
        RecordType::Etymology,
        RecordType::Ubs,
    ];

    /// File name used by the Sedra 3 export for this record type.
    pub fn source_file_name(&self) -> &'static str {
        match self {
            RecordType::Roots => "ROOTS.TXT",
            RecordType::Lexemes => "LEXEMES.TXT",
            RecordType::Words => "WORDS.TXT",
            RecordType::English => "ENGLISH.TXT",
            RecordType::Etymology => "ETYMOLOGY.TXT",
            RecordType::Ubs => "BFBS.TXT",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Roots => "roots",
            RecordType::Lexemes => "lexemes",
            RecordType::Words => "words",
            RecordType::English => "english",
            RecordType::Etymology => "etymology",
            RecordType::Ubs => "ubs",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid RecordType value: {0}")]
pub struct ParseRecordTypeError(String);

impl FromStr for RecordType {
    type Err = ParseRecordTypeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "roots" => Ok(RecordType::Roots),
            "lexemes" => Ok(RecordType::Lexemes),
            "words" => Ok(RecordType::Words),
            "english" => Ok(RecordType::English),
            "etymology" => Ok(RecordType::Etymology),
            "ubs" | "bfbs" => Ok(RecordType::Ubs),
            _ => Err(ParseRecordTypeError(s.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Line {line} is not a BFBS/UBS locator record: {content:?}")]
    Locator { line: usize, content: String },

    #[error("Line {line}: {field} value is out of range: {value}")]
    InvalidNumber { line: usize, field: &'static str, value: String },
}

/// A consonantal root, identified by its position in the root list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    /// CAL transliteration
    pub root: String,
    /// Sort key and homonym marker line, e.g. `"afncljfn     |0"`
    pub meaning: String,
    pub flags: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexeme {
    /// 1-based position in the root list, None for `NULL`
    pub root_ref: Option<u32>,
    pub lexeme: String,
    pub features: i64,
    pub category: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub lexeme_ref: Option<u32>,
    pub consonantal: String,
    pub vocalised: String,
    pub features: i64,
    pub category: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct English {
    /// Resolved lexeme reference. Records without an explicit reference
    /// carry the last explicit one seen before them.
    pub lexeme_ref: Option<u32>,
    pub word: String,
    pub before: String,
    pub after: String,
    pub comment: String,
    pub attributes: i64,
    pub flag: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Etymology {
    pub lexeme_ref: Option<u32>,
    /// Source language string with its backslash escapes kept as-is
    pub origin: String,
    pub category: i64,
}

/// Word slots indexed by `id - 1`. `None` marks an id missing from the export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTable {
    pub words: Vec<Option<Word>>,
    /// Ids of vocalised words with an `i` vowel not carried by a yod
    pub no_y: Vec<u32>,
    /// Ids of vocalised words with an `u` vowel not carried by a waw
    pub no_w: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnglishTable {
    pub english: Vec<English>,
    /// Lexeme reference → ids of every gloss attached to it, in document order
    pub lexeme_index: BTreeMap<u32, Vec<u32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtymologyTable {
    pub etymology: Vec<Option<Etymology>>,
    /// Lexeme reference → id of its etymology note
    pub lexeme_index: BTreeMap<u32, u32>,
}

/// A decoded BFBS/UBS locator line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator {
    pub book: u32,
    pub chapter: u32,
    pub verse: u32,
    pub index: u32,
    pub word_id: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UbsChapter {
    /// Verse number → word ids by in-verse position
    pub verse_words: BTreeMap<u32, Vec<Option<u32>>>,
    pub verses: u32,
    pub words: u32,
    pub rollup_chapters: u32,
    pub rollup_verses: u32,
    pub rollup_words: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UbsBook {
    pub chapter_map: BTreeMap<u32, UbsChapter>,
    pub chapters: u32,
    pub verses: u32,
    pub words: u32,
    pub rollup_books: u32,
    pub rollup_chapters: u32,
    pub rollup_verses: u32,
    pub rollup_words: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UbsMap {
    pub book_map: BTreeMap<u32, UbsBook>,
    pub books: u32,
    pub chapters: u32,
    pub verses: u32,
    pub words: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UbsTable {
    pub ubs: UbsMap,
    /// (book, chapter, verse) in first-seen order; verse 0 marks a new chapter
    pub reference: Vec<[u32; 3]>,
}

/// Rendered literal for the word file and its two ambiguity lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordsJs {
    pub words: String,
    pub no_y: String,
    pub no_w: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnglishJs {
    pub english: String,
    pub lids: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtymologyJs {
    pub etymology: String,
    pub lids: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UbsJs {
    pub ubs: String,
    pub reference: String,
}
